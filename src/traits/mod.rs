pub mod clients;
pub mod renderer;

pub use clients::{
    AsyncPool, AsyncTask, CallerClient, ClientFactory, ClientHandle, JobRef, LocalClient,
    RunnerClient, WheelClient,
};
pub use renderer::{RawDeclaration, RenderContext, Renderer};
