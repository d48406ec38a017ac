// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! Call-scoped security context.
//!
//! The context is a task-local slot holding at most one [`Principal`] for the
//! lifetime of a single request. It is installed by scoping the downstream
//! future, so it is cleared on every exit path — success, failure, or
//! cancellation — when the scope is dropped. There is no process-wide
//! mutable state here; concurrent requests cannot observe each other's
//! principal.

use std::future::Future;

use super::principal::Principal;

tokio::task_local! {
    static CURRENT_PRINCIPAL: Option<Principal>;
}

/// Accessor for the current call's authenticated principal.
pub struct SecurityContext;

impl SecurityContext {
    /// The principal installed for the current call, if any. Outside any
    /// scope (or for anonymous calls) this is `None`.
    pub fn current() -> Option<Principal> {
        CURRENT_PRINCIPAL.try_with(Clone::clone).unwrap_or(None)
    }

    /// Whether the current call is authenticated.
    pub fn is_authenticated() -> bool {
        Self::current().is_some()
    }

    /// Run `f` with the given principal (or anonymous) installed. The slot
    /// is cleared when the returned future completes or is dropped.
    pub async fn scope<F>(principal: Option<Principal>, f: F) -> F::Output
    where
        F: Future,
    {
        CURRENT_PRINCIPAL.scope(principal, f).await
    }

    /// Synchronous variant of [`SecurityContext::scope`].
    pub fn sync_scope<F, R>(principal: Option<Principal>, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        CURRENT_PRINCIPAL.sync_scope(principal, f)
    }
}
