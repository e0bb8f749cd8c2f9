// Application layer - Use case orchestration

pub mod container;
pub mod docs_interactor;

pub use container::{AppContainer, DefaultAppContainer};
pub use docs_interactor::{DocsInteractor, DocsPlan, DocsReport, DocsStep, DocsTarget};
