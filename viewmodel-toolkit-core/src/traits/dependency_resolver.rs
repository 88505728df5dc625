//! Dependency resolution abstraction Trait

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Type-erased dependency resolver
///
/// Use the typed [`resolve`](dyn DependencyResolver::resolve) helper rather than
/// calling `resolve_any` directly.
pub trait DependencyResolver {
    /// Produce a fresh instance of the type identified by `type_id`, if known
    fn resolve_any(&self, type_id: TypeId) -> Option<Box<dyn Any>>;
}

impl dyn DependencyResolver {
    /// Resolve an instance of `T`, or `None` if the resolver does not know it
    pub fn resolve<T: 'static>(&self) -> Option<T> {
        self.resolve_any(TypeId::of::<T>())?
            .downcast::<T>()
            .ok()
            .map(|boxed| *boxed)
    }
}

/// Resolver that knows nothing
///
/// Pages fall back to their `Default` construction; view-models must be registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDependencyResolver;

impl DependencyResolver for DefaultDependencyResolver {
    fn resolve_any(&self, _type_id: TypeId) -> Option<Box<dyn Any>> {
        None
    }
}

type Factory = Box<dyn Fn() -> Box<dyn Any>>;

/// Factory-backed resolver, populated once at startup
#[derive(Default)]
pub struct ServiceRegistry {
    factories: HashMap<TypeId, Factory>,
}

impl ServiceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for `T`, replacing any previous one
    pub fn register<T: 'static>(&mut self, factory: impl Fn() -> T + 'static) -> &mut Self {
        self.factories.insert(
            TypeId::of::<T>(),
            Box::new(move || Box::new(factory()) as Box<dyn Any>),
        );
        self
    }

    /// Register `T` to be built with `T::default()`
    pub fn register_default<T: Default + 'static>(&mut self) -> &mut Self {
        self.register(T::default)
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.factories.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl DependencyResolver for ServiceRegistry {
    fn resolve_any(&self, type_id: TypeId) -> Option<Box<dyn Any>> {
        self.factories.get(&type_id).map(|factory| factory())
    }
}
