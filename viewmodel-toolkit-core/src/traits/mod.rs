//! Host abstraction trait definitions

mod confirmation;
mod dependency_resolver;
mod exception_handler;
mod navigator;
mod page;

pub use confirmation::ConfirmationDialog;
pub use dependency_resolver::{DefaultDependencyResolver, DependencyResolver, ServiceRegistry};
pub use exception_handler::{DefaultExceptionHandler, ExceptionHandler};
pub use navigator::Navigator;
pub use page::{
    BindingContext, Layout, Page, PageRef, SaveBar, SaveBarInjector, SaveBarRef, ToolbarRef,
};
