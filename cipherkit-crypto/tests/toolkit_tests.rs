use cipherkit_crypto::{
    hash, CipherStrength, FailureStage, HashAlgorithm, SelectorPolicy, Toolkit, ToolkitConfig,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("cipherkit_crypto=debug")
        .with_test_writer()
        .try_init();
}

fn legacy_toolkit() -> Toolkit {
    Toolkit::new(ToolkitConfig {
        selector_policy: SelectorPolicy::legacy(),
    })
}

#[test]
fn typed_calls_match_free_functions() {
    let toolkit = Toolkit::default();
    assert_eq!(
        toolkit.hash(b"abc", HashAlgorithm::Sha256).unwrap(),
        hash(b"abc", HashAlgorithm::Sha256).unwrap()
    );
}

#[test]
fn hash_raw_resolves_known_selector() {
    let toolkit = Toolkit::default();
    let digest = toolkit.hash_raw(b"abc", HashAlgorithm::Sha3_256.raw()).unwrap();
    assert_eq!(
        hex::encode(digest),
        "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
    );
}

#[test]
fn strict_toolkit_rejects_unknown_selectors() {
    init_tracing();
    let toolkit = Toolkit::default();
    let err = toolkit.hash_raw(b"abc", 42).unwrap_err();
    assert_eq!(err.stage(), FailureStage::Selector);

    let err = toolkit.encrypt_raw(None, None, b"abc", 42).unwrap_err();
    assert_eq!(err.stage(), FailureStage::Selector);
}

#[test]
fn legacy_toolkit_falls_back() {
    init_tracing();
    let toolkit = legacy_toolkit();
    assert_eq!(
        toolkit.hash_raw(b"abc", 42).unwrap(),
        hash(b"abc", HashAlgorithm::Sha3_256).unwrap()
    );

    let sealed = toolkit.encrypt_raw(None, None, b"abc", 42).unwrap();
    assert_eq!(sealed.key.len(), 16);
}

#[test]
fn raw_encrypt_decrypt_roundtrip() {
    let toolkit = Toolkit::default();
    let selector = CipherStrength::Aes256.raw();

    let sealed = toolkit.encrypt_raw(None, None, b"raw selector data", selector).unwrap();
    assert_eq!(sealed.key.len(), 32);

    let plaintext = toolkit
        .decrypt_raw(&sealed.key, &sealed.iv, &sealed.ciphertext, selector)
        .unwrap();
    assert_eq!(plaintext, b"raw selector data");
}

#[test]
fn typed_encrypt_decrypt_roundtrip() {
    let toolkit = Toolkit::default();
    let sealed = toolkit.encrypt(None, None, b"typed", CipherStrength::Aes128).unwrap();
    let plaintext = toolkit
        .decrypt(&sealed.key, &sealed.iv, &sealed.ciphertext, CipherStrength::Aes128)
        .unwrap();
    assert_eq!(plaintext, b"typed");
}

#[test]
fn random_bytes_through_toolkit() {
    let toolkit = Toolkit::default();
    assert_eq!(toolkit.generate_random_bytes(48).unwrap().len(), 48);
}

#[test]
fn toolkit_is_usable_across_threads() {
    let toolkit = legacy_toolkit();
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let toolkit = toolkit.clone();
            std::thread::spawn(move || {
                let data = vec![i; 100];
                let sealed = toolkit.encrypt(None, None, &data, CipherStrength::Aes256).unwrap();
                let plaintext = toolkit
                    .decrypt(&sealed.key, &sealed.iv, &sealed.ciphertext, CipherStrength::Aes256)
                    .unwrap();
                assert_eq!(plaintext, data);
                toolkit.hash(&data, HashAlgorithm::Sha512).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let digest = handle.join().unwrap();
        assert_eq!(digest, hash(&vec![i as u8; 100], HashAlgorithm::Sha512).unwrap());
    }
}
