use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    dto::ProductDto,
    error::{ServiceError, ServiceResult},
    models::Product,
    storage::Repository,
};

use super::CrudService;

const RESOURCE: &str = "produto";

pub struct ProductService {
    repo: Arc<dyn Repository<Product>>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn Repository<Product>>) -> Self {
        ProductService { repo }
    }

    fn to_entity(dto: ProductDto) -> ServiceResult<Product> {
        let description = dto
            .description
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| ServiceError::validation("desPro is required"))?;
        let quantity = dto
            .quantity
            .ok_or_else(|| ServiceError::validation("qtdeProduto is required"))?;
        let unit_value = dto
            .unit_value
            .ok_or_else(|| ServiceError::validation("valProduto is required"))?;

        Ok(Product {
            id: 0,
            description,
            quantity,
            unit_value,
        })
    }

    fn not_found(id: i64) -> ServiceError {
        ServiceError::NotFound { resource: RESOURCE, id }
    }
}

#[async_trait]
impl CrudService<ProductDto, i64> for ProductService {
    async fn create(&self, entity: ProductDto) -> ServiceResult<ProductDto> {
        if entity.id.is_some() {
            return Err(ServiceError::validation("idProduto is generated by the server"));
        }

        let stored = self.repo.insert(Self::to_entity(entity)?).await?;
        tracing::debug!(id = stored.id, "product stored");

        Ok(stored.into())
    }

    async fn read(&self, id: i64) -> ServiceResult<ProductDto> {
        self.repo
            .find(id)
            .await?
            .map(ProductDto::from)
            .ok_or_else(|| Self::not_found(id))
    }

    async fn read_all(&self) -> ServiceResult<Vec<ProductDto>> {
        let products = self.repo.find_all().await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    async fn update(&self, id: i64, entity: ProductDto) -> ServiceResult<ProductDto> {
        let product = Self::to_entity(entity)?;

        self.repo
            .replace(id, product)
            .await?
            .map(ProductDto::from)
            .ok_or_else(|| Self::not_found(id))
    }

    async fn delete(&self, id: i64) -> ServiceResult<()> {
        if !self.repo.remove(id).await? {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
