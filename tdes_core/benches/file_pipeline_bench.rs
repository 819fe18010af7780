use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::RngCore;
use std::io::Write;
use std::time::{Duration, Instant};
use tdes_core::{
    BlockCipher, CipherContext, CipherInput, CipherOutput, KeyTriple, Operation, Pipeline,
    PipelineConfig,
};
use tempfile::NamedTempFile;
use tokio::runtime::Runtime;
use std::sync::Arc;

/// Isolates the pipeline and file overhead from the cipher itself.
struct IdentityCipher;

impl BlockCipher for IdentityCipher {
    fn encrypt_block(&self, block: u64) -> u64 {
        block
    }
    fn decrypt_block(&self, block: u64) -> u64 {
        block
    }
}

fn bench_file_pipeline(c: &mut Criterion) {
    let mut input_file = NamedTempFile::new().unwrap();
    let mut buffer = vec![0u8; 1024 * 1024];
    let mut rng = rand::rng();
    for _ in 0..16 {
        rng.fill_bytes(&mut buffer);
        input_file.write_all(&buffer).unwrap();
    }
    let input_path = input_file.path().to_path_buf();

    let keys = KeyTriple::parse(&["0123456789abcd", "23456789abcdef", "456789abcdef01"]).unwrap();
    let contexts = [
        ("identity", CipherContext::with_algorithm(Arc::new(IdentityCipher), Operation::Encrypt)),
        ("3des", CipherContext::new(&keys, Operation::Encrypt)),
    ];
    let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();

    let mut group = c.benchmark_group("File Encryption 16MiB");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60));

    let rt = Runtime::new().unwrap();

    for (name, context) in contexts {
        group.bench_function(BenchmarkId::new("ECB File Encrypt", name), |b| {
            b.to_async(&rt).iter(|| {
                let input = input_path.clone();
                let pipeline = pipeline.clone();
                let context = context.clone();
                async move {
                    let output_file = NamedTempFile::new().unwrap();
                    let mut output = CipherOutput::File(output_file.path().to_path_buf());

                    let start = Instant::now();
                    pipeline
                        .process(&context, CipherInput::File(input), &mut output)
                        .await
                        .unwrap();
                    println!("One encrypt duration: {:?}", start.elapsed());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_file_pipeline);
criterion_main!(benches);
