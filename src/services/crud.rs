use async_trait::async_trait;

use crate::error::ServiceResult;

/// Uniform create/read/update/delete surface, parameterized by the transfer
/// object `T` and the identifier `N`.
///
/// Implementations validate input, map it onto their entity and talk to
/// their own repository. Nothing else is shared between them.
#[async_trait]
pub trait CrudService<T, N>: Send + Sync {
    /// Persists a new instance. `entity` must not carry an identifier; the
    /// returned value holds the generated one.
    async fn create(&self, entity: T) -> ServiceResult<T>;

    async fn read(&self, id: N) -> ServiceResult<T>;

    /// Every stored instance, in identifier order.
    async fn read_all(&self) -> ServiceResult<Vec<T>>;

    /// Replaces the instance at `id`. Any identifier inside `entity` is ignored.
    async fn update(&self, id: N, entity: T) -> ServiceResult<T>;

    /// Fails with `NotFound` when nothing is stored at `id`, including on a
    /// repeated delete.
    async fn delete(&self, id: N) -> ServiceResult<()>;
}
