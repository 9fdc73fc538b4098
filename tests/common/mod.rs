use std::sync::Arc;

use axum::Router;
use mongodb::bson::Document;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::mongo::Mongo;

use advertising::app::{self, AppState};
use advertising::db::repository::{AdRepository, MongoAdRepository, ADVERTISE_COLLECTION};
use advertising::error::AppError;

/// Holds the running Mongo container and provides the Axum router for
/// integration tests.
///
/// The container is kept alive for as long as this struct lives. When
/// dropped, it is stopped and cleaned up automatically.
pub struct TestEnv {
    _mongo: ContainerAsync<Mongo>,
    pub router: Router,
    collection: mongodb::Collection<Document>,
}

impl TestEnv {
    /// Spin up a Mongo container and build a router wired to it.
    pub async fn start() -> Self {
        let mongo_container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let mongo_port = mongo_container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");
        let mongo_uri = format!("mongodb://127.0.0.1:{}", mongo_port);
        let mongo_client = mongodb::Client::with_uri_str(&mongo_uri)
            .await
            .expect("Failed to connect to MongoDB");
        let mongo_db = mongo_client.database("advertising_test");
        let collection = mongo_db.collection::<Document>(ADVERTISE_COLLECTION);

        let ads: Arc<dyn AdRepository> = Arc::new(MongoAdRepository::new(&mongo_db));
        let router = app::router(AppState { ads });

        Self {
            _mongo: mongo_container,
            router,
            collection,
        }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.router.clone())
    }

    /// Helper: seed the advertise collection with the given documents.
    pub async fn seed(&self, ads: Vec<Document>) {
        self.collection
            .insert_many(ads)
            .await
            .expect("Failed to seed advertise collection");
    }
}

/// Build a router whose repository always fails, simulating an unreachable
/// store or a request racing ahead of connection bootstrap.
pub fn router_with_failing_repo() -> Router {
    struct FailingRepo;

    #[async_trait::async_trait]
    impl AdRepository for FailingRepo {
        async fn find_all(&self) -> Result<Vec<Document>, AppError> {
            Err(AppError::Database("connection refused".into()))
        }
    }

    app::router(AppState {
        ads: Arc::new(FailingRepo),
    })
}
