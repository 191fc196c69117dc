//! Tests to verify that generator types can be shared across threads.

use mcp_framework_codegen::{
    Domain, GeneratedCode, GenerationConfig, ServerGenerator, TemplateEngine,
};
use std::sync::Arc;
use std::thread;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_public_types_are_send_sync() {
    assert_send_sync::<ServerGenerator<'static>>();
    assert_send_sync::<TemplateEngine<'static>>();
    assert_send_sync::<GenerationConfig>();
    assert_send_sync::<GeneratedCode>();
}

#[test]
fn test_shared_generator_across_threads() {
    let generator = Arc::new(ServerGenerator::new().unwrap());

    let handles: Vec<_> = Domain::ALL
        .into_iter()
        .map(|domain| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                let config = GenerationConfig::builder()
                    .name(format!("{domain}-server"))
                    .domain(domain)
                    .build();
                generator.generate(&config).unwrap().file_count()
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![9, 8, 5]);
}
