#[cfg(test)]
mod storage_tests {
    use rand::RngExt;
    use crate::storage::errors::StorageError;
    use crate::storage::structs::piece_store::PieceStore;
    use crate::storage::traits::piece_storage::PieceStorage;
    use crate::tracker::structs::piece_manifest::PieceManifest;

    fn random_bytes(length: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..length).map(|_| rng.random()).collect()
    }

    async fn open_store(root: &std::path::Path) -> PieceStore {
        PieceStore::open(&root.join("part.dir"), &root.join("complete.dir")).await.unwrap()
    }

    #[tokio::test]
    async fn test_store_and_assemble() {
        let root = tempfile::tempdir().unwrap();
        let store = open_store(root.path()).await;
        let data = random_bytes(4096 + 1000);
        let manifest = PieceManifest::from_bytes("a.bin", &data).unwrap();

        store.store_piece("a.bin", 4096, &data[4096..]).await.unwrap();
        assert_eq!(store.owned_offsets("a.bin").await, vec![4096]);
        assert!(!store.has_complete_copy(&manifest).await);
        assert!(matches!(store.assemble_complete(&manifest).await, Err(StorageError::Incomplete { missing: 1, .. })));

        store.store_piece("a.bin", 0, &data[..4096]).await.unwrap();
        assert!(store.has_complete_copy(&manifest).await);

        let path = store.assemble_complete(&manifest).await.unwrap();
        assert_eq!(tokio::fs::read(&path).await.unwrap(), data);
        assert!(!store.part_path("a.bin", 0).exists(), "parts are removed after assembly");
        assert_eq!(store.owned_offsets("a.bin").await, vec![0, 4096]);
        assert_eq!(store.read_piece("a.bin", 4096).await.unwrap(), data[4096..].to_vec());
    }

    #[tokio::test]
    async fn test_read_unowned_piece() {
        let root = tempfile::tempdir().unwrap();
        let store = open_store(root.path()).await;
        assert!(matches!(store.read_piece("a.bin", 0).await, Err(StorageError::NotOwned { offset: 0, .. })));
        assert!(store.owned_offsets("a.bin").await.is_empty());
    }

    #[tokio::test]
    async fn test_index_rebuilt_on_open() {
        let root = tempfile::tempdir().unwrap();
        {
            let store = open_store(root.path()).await;
            store.store_piece("b.bin", 8192, &[1u8; 4096]).await.unwrap();
            store.store_piece("b.bin", 0, &[2u8; 4096]).await.unwrap();
            tokio::fs::write(store.complete_path("c.bin"), vec![5u8; 5000]).await.unwrap();
        }

        let store = open_store(root.path()).await;
        assert_eq!(store.owned_offsets("b.bin").await, vec![0, 8192]);
        assert_eq!(store.owned_offsets("c.bin").await, vec![0, 4096]);
        assert_eq!(store.owned_files().await, vec![String::from("b.bin"), String::from("c.bin")]);
        assert_eq!(store.read_piece("c.bin", 4096).await.unwrap(), vec![5u8; 904]);
    }

    #[tokio::test]
    async fn test_add_complete_file() {
        let root = tempfile::tempdir().unwrap();
        let store = open_store(root.path()).await;
        let data = random_bytes(9000);
        tokio::fs::write(store.complete_path("d.bin"), &data).await.unwrap();

        assert_eq!(store.add_complete_file("d.bin").await.unwrap(), 9000);
        let manifest = PieceManifest::from_bytes("d.bin", &data).unwrap();
        assert!(store.has_complete_copy(&manifest).await);
        assert!(store.add_complete_file("missing.bin").await.is_err());
    }

    #[tokio::test]
    async fn test_rejects_path_names() {
        let root = tempfile::tempdir().unwrap();
        let store = open_store(root.path()).await;
        assert!(matches!(store.store_piece("../escape", 0, b"x").await, Err(StorageError::InvalidFileName(_))));
    }
}
