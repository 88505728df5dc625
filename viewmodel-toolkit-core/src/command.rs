//! Bindable commands

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;
use futures::future::{FutureExt, LocalBoxFuture};

use crate::error::ToolkitResult;

/// Value passed to a command when it runs; `Null` means "no parameter"
pub type CommandParameter = serde_json::Value;

/// Shared handle to a command bound to a button
pub type CommandRef = Rc<dyn Command>;

/// An invocable action with an enablement predicate
///
/// `can_execute` is queried while view-model state changes are being published,
/// so implementations must not borrow the view-model that owns them. Commands
/// gated on dirty/valid state read [`DialogSession::gate`] instead.
///
/// [`DialogSession::gate`]: crate::dialog::DialogSession::gate
#[async_trait(?Send)]
pub trait Command {
    fn can_execute(&self, _parameter: &CommandParameter) -> bool {
        true
    }

    async fn execute(&self, parameter: CommandParameter) -> ToolkitResult<()>;
}

type ExecuteFn = Box<dyn Fn(CommandParameter) -> LocalBoxFuture<'static, ToolkitResult<()>>>;
type CanExecuteFn = Box<dyn Fn(&CommandParameter) -> bool>;

/// Closure-backed command
pub struct RelayCommand {
    execute: ExecuteFn,
    can_execute: Option<CanExecuteFn>,
}

impl RelayCommand {
    pub fn new<F, Fut>(execute: F) -> Self
    where
        F: Fn(CommandParameter) -> Fut + 'static,
        Fut: Future<Output = ToolkitResult<()>> + 'static,
    {
        Self {
            execute: Box::new(move |parameter| execute(parameter).boxed_local()),
            can_execute: None,
        }
    }

    #[must_use]
    pub fn with_can_execute(
        mut self,
        predicate: impl Fn(&CommandParameter) -> bool + 'static,
    ) -> Self {
        self.can_execute = Some(Box::new(predicate));
        self
    }

    pub fn into_ref(self) -> CommandRef {
        Rc::new(self)
    }
}

impl fmt::Debug for RelayCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayCommand")
            .field("has_can_execute", &self.can_execute.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait(?Send)]
impl Command for RelayCommand {
    fn can_execute(&self, parameter: &CommandParameter) -> bool {
        match &self.can_execute {
            Some(predicate) => predicate(parameter),
            None => true,
        }
    }

    async fn execute(&self, parameter: CommandParameter) -> ToolkitResult<()> {
        (self.execute)(parameter).await
    }
}
