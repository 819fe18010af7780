use rand::RngCore;
use std::env;
use std::fs;
use std::path::PathBuf;
use tdes_core::{
    BoundaryPolicy, CipherContext, CipherInput, CipherOutput, Operation, Pipeline, PipelineConfig,
};

const KEYS: [&str; 3] = ["133457799bbcdf", "0e329232ea6d0d", "a1b2c3d4e5f607"];

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

/// Encrypts a file (or 1 MiB of random bytes) with each boundary policy and
/// worker count, decrypts it again and checks the round trip.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let workdir = tempfile::tempdir()?;
    let input = match env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            let path = workdir.path().join("random.bin");
            fs::write(&path, random_bytes(1024 * 1024))?;
            path
        }
    };
    let data = fs::read(&input)?;
    println!("--- File: {} ({} bytes) ---", input.display(), data.len());

    let encrypt = CipherContext::from_hex_keys(&KEYS, Operation::Encrypt)?;
    let decrypt = CipherContext::from_hex_keys(&KEYS, Operation::Decrypt)?;

    for policy in [BoundaryPolicy::PadWithTrailer, BoundaryPolicy::Reject] {
        if policy == BoundaryPolicy::Reject && data.len() % 8 != 0 {
            println!("{:?}: skipped, input is not block aligned", policy);
            continue;
        }

        for workers in [1, 2, 4] {
            let pipeline = Pipeline::new(
                PipelineConfig::default()
                    .with_workers(workers)
                    .with_boundary(policy),
            )?;

            let encrypted = workdir.path().join(format!("{:?}_{}.enc", policy, workers));
            let restored = workdir.path().join(format!("{:?}_{}.out", policy, workers));

            pipeline
                .process(
                    &encrypt,
                    CipherInput::File(input.clone()),
                    &mut CipherOutput::File(encrypted.clone()),
                )
                .await?;
            pipeline
                .process(
                    &decrypt,
                    CipherInput::File(encrypted.clone()),
                    &mut CipherOutput::File(restored.clone()),
                )
                .await?;

            assert_eq!(data, fs::read(&restored)?);
            println!(
                "{:?} on {} workers: {} -> {} bytes OK",
                policy,
                workers,
                data.len(),
                fs::metadata(&encrypted)?.len()
            );
        }
    }

    Ok(())
}
