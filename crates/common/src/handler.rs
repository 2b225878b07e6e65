use tonic::{Request, Response};

/// A request message that knows how to produce its reply given a service context.
#[async_trait::async_trait]
pub trait Handler<Context>: Send + Sized
where
    Context: Sync,
{
    type Error: Send;
    type Response: Send;

    async fn handle(self, ctx: &Context) -> Result<Self::Response, Self::Error>;
}

#[async_trait::async_trait]
impl<T, C> Handler<C> for Request<T>
where
    T: Handler<C>,
    C: Sync,
{
    type Error = T::Error;
    type Response = Response<T::Response>;

    async fn handle(self, ctx: &C) -> Result<Self::Response, Self::Error> {
        let request = self.into_inner();
        let response = request.handle(ctx).await?;
        Ok(Response::new(response))
    }
}
