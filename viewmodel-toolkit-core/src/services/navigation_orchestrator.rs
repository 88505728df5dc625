//! Page / view-model navigation

use std::any::type_name;
use std::cell::RefCell;
use std::rc::Rc;

use super::ToolkitContext;
use crate::dialog::{DialogSession, DialogSupport};
use crate::error::{ToolkitError, ToolkitResult};
use crate::traits::{Page, PageRef, SaveBarInjector};
use crate::types::DisplayMode;
use crate::viewmodel::{Initializable, IsDefault, Model, ViewModel, ViewModelRef};

/// What a modal navigation returns when the dialog produced the default value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullResultHandling {
    /// Return `M::default()`
    #[default]
    ReturnDefault,
    /// Return the unmodified input the dialog was opened with
    ReturnInput,
}

/// Extra setup run with the freshly built page and view-model, inside the clean scope
pub type Initializer<P, VM> = Box<dyn FnOnce(&mut P, &mut VM) -> ToolkitResult<()>>;

/// Options of a non-modal push
pub struct PushOptions<P, VM> {
    /// Overrides the configured transition animation
    pub animated: Option<bool>,
    pub initializer: Option<Initializer<P, VM>>,
}

impl<P, VM> Default for PushOptions<P, VM> {
    fn default() -> Self {
        Self {
            animated: None,
            initializer: None,
        }
    }
}

impl<P, VM> PushOptions<P, VM> {
    #[must_use]
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = Some(animated);
        self
    }

    #[must_use]
    pub fn with_initializer(
        mut self,
        initializer: impl FnOnce(&mut P, &mut VM) -> ToolkitResult<()> + 'static,
    ) -> Self {
        self.initializer = Some(Box::new(initializer));
        self
    }
}

/// Options of a modal navigation
pub struct ModalOptions<M, P, VM> {
    /// Overrides the configured default display mode
    pub display_mode: Option<DisplayMode>,
    /// Overrides the configured transition animation
    pub animated: Option<bool>,
    pub null_result: NullResultHandling,
    pub initializer: Option<Initializer<P, VM>>,
    pub save_bar_injector: Option<SaveBarInjector>,
    /// Pops without animation when this returns `true` for the result
    pub suppress_return_animation: Option<Box<dyn Fn(&M) -> bool>>,
}

impl<M, P, VM> Default for ModalOptions<M, P, VM> {
    fn default() -> Self {
        Self {
            display_mode: None,
            animated: None,
            null_result: NullResultHandling::ReturnDefault,
            initializer: None,
            save_bar_injector: None,
            suppress_return_animation: None,
        }
    }
}

impl<M, P, VM> ModalOptions<M, P, VM> {
    #[must_use]
    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = Some(mode);
        self
    }

    #[must_use]
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = Some(animated);
        self
    }

    #[must_use]
    pub fn null_result(mut self, handling: NullResultHandling) -> Self {
        self.null_result = handling;
        self
    }

    #[must_use]
    pub fn with_initializer(
        mut self,
        initializer: impl FnOnce(&mut P, &mut VM) -> ToolkitResult<()> + 'static,
    ) -> Self {
        self.initializer = Some(Box::new(initializer));
        self
    }

    #[must_use]
    pub fn save_bar_injector(mut self, injector: SaveBarInjector) -> Self {
        self.save_bar_injector = Some(injector);
        self
    }

    #[must_use]
    pub fn suppress_return_animation(
        mut self,
        predicate: impl Fn(&M) -> bool + 'static,
    ) -> Self {
        self.suppress_return_animation = Some(Box::new(predicate));
        self
    }
}

/// Resolves page/view-model pairs and drives them through the navigation stack
///
/// Every failure inside a navigation call is handed to the context's
/// exception handler; if the handler swallows it, modal calls return
/// `M::default()`.
#[derive(Clone)]
pub struct NavigationOrchestrator {
    ctx: Rc<ToolkitContext>,
}

impl NavigationOrchestrator {
    #[must_use]
    pub fn new(ctx: Rc<ToolkitContext>) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ToolkitContext {
        &self.ctx
    }

    /// Push `P` bound to a parameterless-initialized `VM`
    pub async fn navigate_push<P, VM>(&self, options: PushOptions<P, VM>) -> ToolkitResult<()>
    where
        P: Page + Default + 'static,
        VM: ViewModel,
    {
        let result = self
            .push_page(|vm: &mut VM| vm.initialize_default(), options)
            .await;
        self.handle(result)
    }

    /// Push `P` bound to a `VM` seeded with `input`
    pub async fn navigate_push_with<M, P, VM>(
        &self,
        input: M,
        options: PushOptions<P, VM>,
    ) -> ToolkitResult<()>
    where
        P: Page + Default + 'static,
        VM: ViewModel + Initializable<M>,
    {
        let result = self
            .push_page(move |vm: &mut VM| vm.initialize(input), options)
            .await;
        self.handle(result)
    }

    /// Show `P` modally, suspend until its dialog concludes and return the result
    ///
    /// A result equal to `M::default()` is mapped per `options.null_result`.
    pub async fn navigate_modal<M, P, VM>(
        &self,
        input: M,
        options: ModalOptions<M, P, VM>,
    ) -> ToolkitResult<M>
    where
        M: Model,
        P: Page + Default + 'static,
        VM: DialogSupport<M>,
    {
        match self.run_modal(input, options).await {
            Ok(result) => Ok(result),
            Err(error) => {
                self.ctx.exception_handler.handle_exception(error)?;
                Ok(M::default())
            }
        }
    }

    async fn push_page<P, VM>(
        &self,
        init: impl FnOnce(&mut VM) -> ToolkitResult<()>,
        options: PushOptions<P, VM>,
    ) -> ToolkitResult<()>
    where
        P: Page + Default + 'static,
        VM: ViewModel,
    {
        let (page, vm) = self.resolve_pair::<P, VM>()?;
        Self::initialize(&page, &vm, init, options.initializer)?;

        let animated = options.animated.unwrap_or(self.ctx.config.animate_transitions);
        self.ctx.navigator.push(page, animated).await?;
        log::info!("Pushed {}", type_name::<P>());
        Ok(())
    }

    async fn run_modal<M, P, VM>(
        &self,
        input: M,
        options: ModalOptions<M, P, VM>,
    ) -> ToolkitResult<M>
    where
        M: Model,
        P: Page + Default + 'static,
        VM: DialogSupport<M>,
    {
        let ModalOptions {
            display_mode,
            animated,
            null_result,
            initializer,
            save_bar_injector,
            suppress_return_animation,
        } = options;

        let (page, vm) = self.resolve_pair::<P, VM>()?;
        let display_mode = display_mode.unwrap_or(self.ctx.config.default_display_mode);
        let config = self.ctx.dialog_config(display_mode, save_bar_injector);
        DialogSession::<M>::configure(&vm, &mut *page.borrow_mut(), config)?;

        let seed = input.clone();
        Self::initialize(
            &page,
            &vm,
            move |editor: &mut VM| Initializable::<M>::initialize(editor, seed),
            initializer,
        )?;
        let result = vm.borrow_mut().dialog_mut().begin()?;

        let animated = animated.unwrap_or(self.ctx.config.animate_transitions);
        let page: PageRef = page;
        self.ctx.navigator.push_modal(page.clone(), animated).await?;
        log::info!("Presented {} modally", type_name::<P>());

        let result = result.await?;

        let suppress = suppress_return_animation
            .as_ref()
            .is_some_and(|predicate| predicate(&result));
        let popped = self.ctx.navigator.pop_modal(animated && !suppress).await?;
        if Rc::as_ptr(&popped).cast::<()>() != Rc::as_ptr(&page).cast::<()>() {
            log::warn!(
                "Popped modal page is not the {} this dialog presented",
                type_name::<P>()
            );
        }

        Ok(apply_null_result(result, input, null_result))
    }

    fn resolve_pair<P, VM>(&self) -> ToolkitResult<(Rc<RefCell<P>>, ViewModelRef<VM>)>
    where
        P: Default + 'static,
        VM: 'static,
    {
        let page = self.ctx.resolver.resolve::<P>().unwrap_or_default();
        let vm = self
            .ctx
            .resolver
            .resolve::<VM>()
            .ok_or_else(|| ToolkitError::Unresolved(type_name::<VM>().to_string()))?;
        Ok((Rc::new(RefCell::new(page)), Rc::new(RefCell::new(vm))))
    }

    /// Run `init` and the caller's initializer in a clean scope, then bind the page
    fn initialize<P, VM>(
        page: &Rc<RefCell<P>>,
        vm: &ViewModelRef<VM>,
        init: impl FnOnce(&mut VM) -> ToolkitResult<()>,
        initializer: Option<Initializer<P, VM>>,
    ) -> ToolkitResult<()>
    where
        P: Page + 'static,
        VM: ViewModel,
    {
        let mut editor = vm.borrow_mut();
        let mut view = page.borrow_mut();
        editor.execute_cleanly(|editor| {
            init(editor)?;
            match initializer {
                Some(initializer) => initializer(&mut *view, editor),
                None => Ok(()),
            }
        })?;
        editor.set_dirty(false);
        view.set_binding_context(vm.clone());
        Ok(())
    }

    fn handle(&self, result: ToolkitResult<()>) -> ToolkitResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(error) => self.ctx.exception_handler.handle_exception(error),
        }
    }
}

fn apply_null_result<M: Model>(result: M, input: M, handling: NullResultHandling) -> M {
    if !result.is_default() {
        return result;
    }
    match handling {
        NullResultHandling::ReturnDefault => result,
        NullResultHandling::ReturnInput => {
            log::debug!("Dialog returned no result; handing back its input");
            input
        }
    }
}
