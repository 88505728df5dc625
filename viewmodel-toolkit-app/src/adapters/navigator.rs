//! In-memory navigation stack

use std::cell::RefCell;

use async_trait::async_trait;
use serde::Serialize;

use viewmodel_toolkit_core::error::{ToolkitError, ToolkitResult};
use viewmodel_toolkit_core::traits::{Navigator, PageRef};
use viewmodel_toolkit_core::viewmodel::ViewModelRef;

use super::page::view_model_of;

/// A recorded stack transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Transition {
    Push { animated: bool },
    Pop { animated: bool },
    PushModal { animated: bool },
    PopModal { animated: bool },
}

impl Transition {
    pub fn animated(self) -> bool {
        match self {
            Self::Push { animated }
            | Self::Pop { animated }
            | Self::PushModal { animated }
            | Self::PopModal { animated } => animated,
        }
    }
}

/// Page stack and modal stack held in memory, both LIFO
#[derive(Default)]
pub struct InMemoryNavigator {
    pages: RefCell<Vec<PageRef>>,
    modals: RefCell<Vec<PageRef>>,
    transitions: RefCell<Vec<Transition>>,
}

impl InMemoryNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the top of the regular page stack
    pub fn pop(&self, animated: bool) -> ToolkitResult<PageRef> {
        let page = self
            .pages
            .borrow_mut()
            .pop()
            .ok_or_else(|| ToolkitError::Navigation("page stack is empty".to_string()))?;
        self.record(Transition::Pop { animated });
        Ok(page)
    }

    pub fn page_depth(&self) -> usize {
        self.pages.borrow().len()
    }

    pub fn modal_depth(&self) -> usize {
        self.modals.borrow().len()
    }

    pub fn top_page(&self) -> Option<PageRef> {
        self.pages.borrow().last().cloned()
    }

    pub fn top_modal(&self) -> Option<PageRef> {
        self.modals.borrow().last().cloned()
    }

    /// View-model bound to the top modal page, if it is a `VM`
    pub fn top_modal_view_model<VM: 'static>(&self) -> Option<ViewModelRef<VM>> {
        view_model_of(&self.top_modal()?)
    }

    pub fn top_page_view_model<VM: 'static>(&self) -> Option<ViewModelRef<VM>> {
        view_model_of(&self.top_page()?)
    }

    pub fn transitions(&self) -> Vec<Transition> {
        self.transitions.borrow().clone()
    }

    fn record(&self, transition: Transition) {
        log::debug!("Navigator transition: {transition:?}");
        self.transitions.borrow_mut().push(transition);
    }
}

#[async_trait(?Send)]
impl Navigator for InMemoryNavigator {
    async fn push(&self, page: PageRef, animated: bool) -> ToolkitResult<()> {
        self.pages.borrow_mut().push(page);
        self.record(Transition::Push { animated });
        Ok(())
    }

    async fn push_modal(&self, page: PageRef, animated: bool) -> ToolkitResult<()> {
        self.modals.borrow_mut().push(page);
        self.record(Transition::PushModal { animated });
        Ok(())
    }

    async fn pop_modal(&self, animated: bool) -> ToolkitResult<PageRef> {
        let page = self
            .modals
            .borrow_mut()
            .pop()
            .ok_or_else(|| ToolkitError::Navigation("modal stack is empty".to_string()))?;
        self.record(Transition::PopModal { animated });
        Ok(page)
    }
}
