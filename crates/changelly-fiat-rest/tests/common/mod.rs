//! Shared fixtures for client integration tests

use std::sync::OnceLock;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use changelly_fiat_rest::{ChangellyFiatClient, ClientConfig, Credentials};
use httpmock::MockServer;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey, EncodeRsaPublicKey, LineEnding};
use rsa::pkcs1v15::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer as _};
use rsa::RsaPrivateKey;
use url::Url;

pub const TEST_PUBLIC_KEY: &str = "pk_test";

pub struct TestKeys {
    pub private_pem: String,
    pub public_pem: String,
}

/// One RSA key pair for the whole test binary; generation is expensive
pub fn test_keys() -> &'static TestKeys {
    static KEYS: OnceLock<TestKeys> = OnceLock::new();
    KEYS.get_or_init(|| {
        let mut rng = rand::thread_rng();
        let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("key generation");
        let public_key = private_key.to_public_key();
        TestKeys {
            private_pem: private_key
                .to_pkcs1_pem(LineEnding::LF)
                .expect("private pem")
                .to_string(),
            public_pem: public_key.to_pkcs1_pem(LineEnding::LF).expect("public pem"),
        }
    })
}

/// A client wired to the mock server with the shared test keys
pub fn test_client(server: &MockServer) -> ChangellyFiatClient {
    let keys = test_keys();
    let creds = Credentials::new(TEST_PUBLIC_KEY, keys.private_pem.clone())
        .with_callback_public_key(keys.public_pem.clone());
    let config = ClientConfig::new(creds)
        .with_base_url(Url::parse(&server.base_url()).expect("mock server URL"));
    ChangellyFiatClient::with_config(config)
}

/// Sign a raw payload exactly the way the client does
pub fn sign_payload(payload: &[u8]) -> String {
    let keys = test_keys();
    let private_key = RsaPrivateKey::from_pkcs1_pem(&keys.private_pem).expect("private key");
    let signing_key = SigningKey::<Sha256>::new(private_key);
    BASE64.encode(signing_key.try_sign(payload).expect("sign").to_bytes())
}
