//! Synthetic save archives for tests.

use std::io::Write as _;

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockEncryptMut, KeyIvInit};
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::config::CipherConfig;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Encrypts a plaintext the way the game stores members: AES-256-CBC with
/// PKCS#7 padding.
pub fn encrypt_member(plaintext: &[u8], cipher: &CipherConfig) -> Vec<u8> {
    Aes256CbcEnc::new((&cipher.key).into(), (&cipher.iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Builds a save archive from `(member name, marker byte, plaintext)`
/// triples. Real saves carry `0x01` as the marker.
pub fn build_save_archive(members: &[(&str, u8, &[u8])], cipher: &CipherConfig) -> Vec<u8> {
    let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (name, marker, plaintext) in members {
        writer
            .start_file(*name, options)
            .expect("start zip member");
        writer.write_all(&[*marker]).expect("write marker");
        writer
            .write_all(&encrypt_member(plaintext, cipher))
            .expect("write ciphertext");
    }

    writer.finish().expect("finish zip").into_inner()
}
