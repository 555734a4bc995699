use lectio_bible::{Bible, init};
use lectio_kernel::domain::config::ApiConfig;

#[test]
fn init_registers_the_bible_slice() {
    let slice = init(&ApiConfig::default()).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Bible>());
    assert_eq!(slice.name, "bible");
    assert_eq!(Bible::NAME, "bible");

    let bible = slice.downcast_ref::<Bible>().unwrap();
    assert!(bible.versions.resolve("KJV").is_some());
}

#[test]
fn configured_versions_extend_the_table() {
    let mut config = ApiConfig::default();
    config.upstream.versions.insert("lsb".to_owned(), 3345);

    let slice = init(&config).unwrap();
    let bible = slice.downcast_ref::<Bible>().unwrap();
    assert_eq!(bible.versions.resolve("LSB").map(|v| v.id), Some(3345));
}
