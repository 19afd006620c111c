//! Ready-made item processors

use crate::error::Result;
use crate::pagination::ItemProcessor;
use async_trait::async_trait;

/// Processor that does nothing with the items
///
/// Use it when only the accumulated items are of interest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Skip;

#[async_trait]
impl<T: Sync> ItemProcessor<T> for Skip {
    async fn process(&self, _item: &T) -> Result<()> {
        Ok(())
    }
}

/// Adapts a synchronous closure into an [`ItemProcessor`]
///
/// ```rust
/// use pagewalk::process::ProcessWith;
///
/// let printer = ProcessWith::new(|name: &String| {
///     println!("{name}");
///     Ok(())
/// });
/// # let _ = printer;
/// ```
#[derive(Debug, Clone)]
pub struct ProcessWith<F> {
    f: F,
}

impl<F> ProcessWith<F> {
    /// Wrap a closure
    pub fn new<T>(f: F) -> Self
    where
        F: Fn(&T) -> Result<()>,
    {
        Self { f }
    }
}

#[async_trait]
impl<T, F> ItemProcessor<T> for ProcessWith<F>
where
    T: Sync,
    F: Fn(&T) -> Result<()> + Send + Sync,
{
    async fn process(&self, item: &T) -> Result<()> {
        (self.f)(item)
    }
}
