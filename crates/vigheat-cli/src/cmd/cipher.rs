// crates/vigheat-cli/src/cmd/cipher.rs

use anyhow::Context;
use clap::Args;
use tracing::warn;
use vigheat_core::validate::{normalize_plaintext, validate_plaintext};
use vigheat_core::{decrypt, encrypt, Key};

#[derive(Args, Debug)]
pub struct CipherArgs {
    /// Input text
    #[arg(long)]
    pub text: String,

    /// Key (lowercase a-z, non-empty)
    #[arg(long)]
    pub key: String,

    /// Lowercase the input text first
    #[arg(long, default_value_t = false)]
    pub normalize: bool,
}

impl CipherArgs {
    fn prepare(&self) -> anyhow::Result<(String, Key)> {
        let key = Key::new(&self.key).context("parse --key")?;
        let text = if self.normalize {
            normalize_plaintext(&self.text)
        } else {
            self.text.clone()
        };
        if let Err(e) = validate_plaintext(&text) {
            warn!("{e}; non-lowercase letters are passed through unshifted");
        }
        Ok((text, key))
    }
}

pub fn run_encrypt(args: CipherArgs) -> anyhow::Result<()> {
    let (text, key) = args.prepare()?;
    println!("{}", encrypt(&text, &key));
    Ok(())
}

pub fn run_decrypt(args: CipherArgs) -> anyhow::Result<()> {
    let (text, key) = args.prepare()?;
    println!("{}", decrypt(&text, &key));
    Ok(())
}
