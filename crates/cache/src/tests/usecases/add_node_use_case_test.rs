#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::core::{
        UseCase, UseCaseValidatable,
        domain::models::{CacheError, StoreRegistry, usecases::AddNodeUseCaseInput},
        usecases::AddNodeUseCase,
    };
    use crate::tests::test_mocks::{MockConnector, MockNodeFinder, MockStore};

    fn input(address: &str) -> AddNodeUseCaseInput {
        AddNodeUseCaseInput {
            address: address.into(),
        }
    }

    #[tokio::test]
    async fn validate_fails_when_address_is_blank() {
        let uc = AddNodeUseCase::new(
            Arc::new(MockNodeFinder::new()),
            StoreRegistry::new_shared(),
            Arc::new(MockConnector::new()),
        );

        for address in ["", "   "] {
            let err = uc.validate(&input(address)).await.unwrap_err();
            assert_eq!(err, CacheError::BadRequest("Node address is empty".into()));
        }
    }

    #[tokio::test]
    async fn registers_client_then_adds_to_ring() {
        let finder = Arc::new(MockNodeFinder::new());
        let registry = StoreRegistry::new_shared();
        let connector = Arc::new(MockConnector::new());
        let uc = AddNodeUseCase::new(finder.clone(), registry.clone(), connector.clone());

        let out = uc
            .validate_and_execute(input("10.0.0.1:6379"))
            .await
            .expect("add succeeds");

        assert_eq!(out.node_id, "10.0.0.1:6379");
        assert_eq!(out.vnodes, 3);
        assert_eq!(connector.last_connect.lock().as_deref(), Some("10.0.0.1:6379"));
        assert_eq!(finder.last_add_node.lock().as_deref(), Some("10.0.0.1:6379"));
        assert!(registry.contains("10.0.0.1:6379"));
    }

    #[tokio::test]
    async fn rejects_address_already_registered() {
        let finder = Arc::new(MockNodeFinder::new());
        let registry = StoreRegistry::new_shared();
        registry.insert("n1", MockStore::new_shared());
        let connector = Arc::new(MockConnector::new());
        let uc = AddNodeUseCase::new(finder.clone(), registry, connector.clone());

        let err = uc.execute(input("n1")).await.unwrap_err();

        assert_eq!(err, CacheError::NodeAlreadyExists("n1".into()));
        assert!(connector.last_connect.lock().is_none());
        assert!(finder.last_add_node.lock().is_none());
    }

    #[tokio::test]
    async fn rejects_address_already_in_ring() {
        let finder = Arc::new(MockNodeFinder::new());
        finder.set_contains_result(true);
        let registry = StoreRegistry::new_shared();
        let uc = AddNodeUseCase::new(finder, registry.clone(), Arc::new(MockConnector::new()));

        let err = uc.execute(input("n1")).await.unwrap_err();

        assert_eq!(err, CacheError::NodeAlreadyExists("n1".into()));
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn rolls_back_client_when_ring_refuses_node() {
        let finder = Arc::new(MockNodeFinder::new());
        finder.set_add_node_result(false);
        let registry = StoreRegistry::new_shared();
        let uc = AddNodeUseCase::new(finder, registry.clone(), Arc::new(MockConnector::new()));

        let err = uc.execute(input("n1")).await.unwrap_err();

        assert_eq!(err, CacheError::NodeAlreadyExists("n1".into()));
        assert!(!registry.contains("n1"));
    }

    #[tokio::test]
    async fn connect_failure_leaves_ring_untouched() {
        let finder = Arc::new(MockNodeFinder::new());
        let registry = StoreRegistry::new_shared();
        let connector = Arc::new(MockConnector::new());
        connector.set_connect_error(Some(CacheError::Store {
            node: "n1".into(),
            message: "connection refused".into(),
        }));
        let uc = AddNodeUseCase::new(finder.clone(), registry.clone(), connector);

        let err = uc.execute(input("n1")).await.unwrap_err();

        assert!(matches!(err, CacheError::Store { .. }));
        assert!(registry.is_empty());
        assert!(finder.last_add_node.lock().is_none());
    }
}
