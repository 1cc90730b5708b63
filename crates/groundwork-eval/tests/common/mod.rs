use async_trait::async_trait;
use groundwork_provider::{
    BasicComponentFactory, Block, DataSourceDescriptor, InputValues, Provider, ProviderHandle,
    ProviderSchema, ResourceTypeDescriptor, Result, SchemaRequest,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-process provider recording every call made across the plugin boundary
pub struct MockProvider {
    pub resources: Vec<ResourceTypeDescriptor>,
    pub data_sources: Vec<DataSourceDescriptor>,
    pub schema: ProviderSchema,
    /// Artificial latency for the schema round trip
    pub schema_delay: Option<Duration>,
    schema_requests: Mutex<Vec<SchemaRequest>>,
    configured: Mutex<Vec<InputValues>>,
}

impl MockProvider {
    pub fn new(schema: ProviderSchema) -> Self {
        Self {
            resources: Vec::new(),
            data_sources: Vec::new(),
            schema,
            schema_delay: None,
            schema_requests: Mutex::new(Vec::new()),
            configured: Mutex::new(Vec::new()),
        }
    }

    /// Provider declaring one resource type and one data source, both named
    /// `test_thing`, with schemas to match
    pub fn test_thing() -> Self {
        let schema = ProviderSchema {
            provider: Block::new(),
            resource_types: [("test_thing".to_string(), Block::new())].into(),
            data_sources: [("test_thing".to_string(), Block::new())].into(),
        };
        Self::new(schema)
            .with_resource("test_thing", true)
            .with_data_source("test_thing", true)
    }

    pub fn with_resource(mut self, name: &str, schema_available: bool) -> Self {
        self.resources.push(ResourceTypeDescriptor {
            name: name.to_string(),
            schema_available,
        });
        self
    }

    pub fn with_data_source(mut self, name: &str, schema_available: bool) -> Self {
        self.data_sources.push(DataSourceDescriptor {
            name: name.to_string(),
            schema_available,
        });
        self
    }

    #[allow(dead_code)]
    pub fn with_schema_delay(mut self, delay: Duration) -> Self {
        self.schema_delay = Some(delay);
        self
    }

    pub fn schema_requests(&self) -> Vec<SchemaRequest> {
        self.schema_requests.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn configured_with(&self) -> Vec<InputValues> {
        self.configured.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn resources(&self) -> Vec<ResourceTypeDescriptor> {
        self.resources.clone()
    }

    fn data_sources(&self) -> Vec<DataSourceDescriptor> {
        self.data_sources.clone()
    }

    async fn schema(&self, request: &SchemaRequest) -> Result<ProviderSchema> {
        if let Some(delay) = self.schema_delay {
            tokio::time::sleep(delay).await;
        }
        self.schema_requests.lock().unwrap().push(request.clone());
        Ok(self.schema.clone())
    }

    async fn configure(&self, values: InputValues) -> Result<()> {
        self.configured.lock().unwrap().push(values);
        Ok(())
    }
}

/// Factory handing out the same mock instance while counting constructions
pub fn counting_factory(
    type_name: &str,
    provider: Arc<MockProvider>,
) -> (Arc<BasicComponentFactory>, Arc<AtomicUsize>) {
    let constructions = Arc::new(AtomicUsize::new(0));
    let count = Arc::clone(&constructions);

    let mut factory = BasicComponentFactory::new();
    factory.register(type_name, move || {
        count.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::clone(&provider) as ProviderHandle)
    });

    (Arc::new(factory), constructions)
}
