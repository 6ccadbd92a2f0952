use async_trait::async_trait;

use crate::core::domain::models::CacheError;

#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send + Sync + 'static;
    type Output: Send + 'static;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, CacheError>;
}

/// Use cases whose input must be checked before anything is touched.
#[async_trait]
pub trait UseCaseValidatable: UseCase {
    async fn validate(&self, input: &Self::Input) -> Result<(), CacheError>;

    async fn validate_and_execute(&self, input: Self::Input) -> Result<Self::Output, CacheError> {
        self.validate(&input).await?;
        self.execute(input).await
    }
}
