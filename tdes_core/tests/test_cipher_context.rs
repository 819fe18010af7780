#[cfg(test)]
mod tests {
    use rand::RngCore;
    use std::fs;
    use tdes_core::crypto::cipher_io::read_all;
    use tdes_core::{
        BoundaryPolicy, CipherContext, CipherError, CipherInput, CipherOutput, ConfigError,
        Operation, Pipeline, PipelineConfig,
    };
    use tempfile::tempdir;

    const KEYS: [&str; 3] = ["133457799bbcdf", "0e329232ea6d0d", "a1b2c3d4e5f607"];

    fn random_bytes(len: usize) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        rand::rng().fill_bytes(&mut buf);
        buf
    }

    fn pipeline(boundary: BoundaryPolicy) -> Pipeline {
        Pipeline::new(
            PipelineConfig::default()
                .with_workers(4)
                .with_boundary(boundary),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_buffer_roundtrip() {
        let pipeline = pipeline(BoundaryPolicy::PadWithTrailer);
        let encrypt = CipherContext::from_hex_keys(&KEYS, Operation::Encrypt).unwrap();
        let decrypt = CipherContext::from_hex_keys(&KEYS, Operation::Decrypt).unwrap();
        let data = b"Triple DES over an ordered pipeline".to_vec();

        let mut encrypted = CipherOutput::Buffer(Vec::new());
        pipeline
            .process(&encrypt, CipherInput::Bytes(data.clone()), &mut encrypted)
            .await
            .unwrap();
        let ciphertext = encrypted.as_buffer().unwrap().to_vec();
        assert_eq!(ciphertext.len(), 48);
        assert_ne!(&ciphertext[..data.len()], &data[..]);

        let mut decrypted = CipherOutput::Buffer(Vec::new());
        pipeline
            .process(&decrypt, CipherInput::Bytes(ciphertext), &mut decrypted)
            .await
            .unwrap();
        assert_eq!(decrypted.as_buffer().unwrap(), &data[..]);
    }

    #[tokio::test]
    async fn test_file_roundtrip() {
        let dir = tempdir().unwrap();
        let plain_path = dir.path().join("plain.bin");
        let cipher_path = dir.path().join("cipher.bin");
        let restored_path = dir.path().join("restored.bin");

        let data = random_bytes(100_003);
        fs::write(&plain_path, &data).unwrap();

        let pipeline = pipeline(BoundaryPolicy::PadWithTrailer);
        let encrypt = CipherContext::from_hex_keys(&KEYS, Operation::Encrypt).unwrap();
        let decrypt = CipherContext::from_hex_keys(&KEYS, Operation::Decrypt).unwrap();

        let mut output = CipherOutput::File(cipher_path.clone());
        pipeline
            .process(&encrypt, CipherInput::File(plain_path), &mut output)
            .await
            .unwrap();
        assert!(output.as_buffer().is_none());
        assert_eq!(fs::metadata(&cipher_path).unwrap().len(), 100_016);

        let mut output = CipherOutput::File(restored_path.clone());
        pipeline
            .process(&decrypt, CipherInput::File(cipher_path), &mut output)
            .await
            .unwrap();
        assert_eq!(fs::read(&restored_path).unwrap(), data);
    }

    #[tokio::test]
    async fn test_file_and_buffer_outputs_agree() {
        let dir = tempdir().unwrap();
        let out_path = dir.path().join("out.bin");
        let data = random_bytes(4096);
        let pipeline = pipeline(BoundaryPolicy::Reject);
        let context = CipherContext::from_hex_keys(&KEYS, Operation::Encrypt).unwrap();

        let mut to_file = CipherOutput::File(out_path.clone());
        pipeline
            .process(&context, CipherInput::Bytes(data.clone()), &mut to_file)
            .await
            .unwrap();

        let mut to_buffer = CipherOutput::Buffer(vec![0xAA; 3]);
        pipeline
            .process(&context, CipherInput::Bytes(data), &mut to_buffer)
            .await
            .unwrap();

        assert_eq!(fs::read(&out_path).unwrap(), to_buffer.as_buffer().unwrap());
    }

    #[test]
    fn test_read_all_moves_in_memory_input() {
        let data = random_bytes(1024);
        let address = data.as_ptr();

        let read = read_all(CipherInput::Bytes(data)).unwrap();
        assert_eq!(read.as_ptr(), address);
        assert_eq!(read.len(), 1024);
    }

    #[test]
    fn test_bad_keys_fail_before_any_work() {
        assert!(matches!(
            CipherContext::from_hex_keys(&["01", "02"], Operation::Encrypt),
            Err(ConfigError::KeyCount { expected: 3, actual: 2 })
        ));
        assert!(matches!(
            CipherContext::from_hex_keys(&["01", "zz", "03"], Operation::Encrypt),
            Err(ConfigError::MalformedKey { position: 2, .. })
        ));
        assert!(matches!(
            CipherContext::from_hex_keys(&["01", "02", "ffffffffffffffff"], Operation::Decrypt),
            Err(ConfigError::KeyOutOfRange { position: 3, .. })
        ));
    }

    #[tokio::test]
    async fn test_failed_run_leaves_no_output() {
        let dir = tempdir().unwrap();
        let out_path = dir.path().join("never.bin");
        let pipeline = pipeline(BoundaryPolicy::Reject);
        let context = CipherContext::from_hex_keys(&KEYS, Operation::Encrypt).unwrap();

        let mut output = CipherOutput::File(out_path.clone());
        let result = pipeline
            .process(&context, CipherInput::Bytes(vec![1, 2, 3]), &mut output)
            .await;

        assert!(matches!(result, Err(CipherError::InputAlignment { len: 3, block_size: 8 })));
        assert!(!out_path.exists());
    }

    #[tokio::test]
    async fn test_missing_input_file_is_io_error() {
        let dir = tempdir().unwrap();
        let out_path = dir.path().join("out.bin");
        let pipeline = pipeline(BoundaryPolicy::PadWithTrailer);
        let context = CipherContext::from_hex_keys(&KEYS, Operation::Encrypt).unwrap();

        let mut output = CipherOutput::File(out_path.clone());
        let result = pipeline
            .process(
                &context,
                CipherInput::File(dir.path().join("absent.bin")),
                &mut output,
            )
            .await;

        assert!(matches!(result, Err(CipherError::Io(_))));
        assert!(!out_path.exists());
    }

    #[test]
    fn test_context_is_shared_across_threads() {
        let context = CipherContext::from_hex_keys(&KEYS, Operation::Encrypt).unwrap();
        let expected = context.transform_block(0x0123_4567_89AB_CDEF);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let context = context.clone();
                std::thread::spawn(move || context.transform_block(0x0123_4567_89AB_CDEF))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
        assert_eq!(context.operation(), Operation::Encrypt);
    }
}
