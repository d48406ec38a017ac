// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! In-memory user and order stores.
//!
//! These stand in for the external persistence collaborator; the core never
//! depends on how they are backed. Users carry sequential numeric ids (they
//! become token subjects), orders carry UUID ids.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::AppError;
use crate::models::{CreateOrderRequest, UpdateOrderRequest};

/// A stored user account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

#[derive(Default)]
pub struct UserStore {
    users: HashMap<i64, User>,
    next_id: i64,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&User> {
        self.users
            .values()
            .find(|user| user.name.eq_ignore_ascii_case(name))
    }

    pub fn get(&self, id: i64) -> Result<&User, AppError> {
        self.users
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("User not found with ID: {id}")))
    }

    pub fn list(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by_key(|user| user.id);
        users
    }

    /// Insert a new user; name and email must both be unique.
    pub fn insert_user(
        &mut self,
        name: &str,
        email: &str,
        password_hash: String,
        role: &str,
    ) -> Result<User, AppError> {
        self.validate_unique(name, email, None)?;

        self.next_id += 1;
        let user = User {
            id: self.next_id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            role: role.to_string(),
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    /// Update an existing user's name and email after checking uniqueness
    /// against every other user.
    pub fn update_user(&mut self, id: i64, name: &str, email: &str) -> Result<User, AppError> {
        self.get(id)?;
        self.validate_unique(name, email, Some(id))?;

        let user = self.users.get_mut(&id).expect("existence checked above");
        user.name = name.to_string();
        user.email = email.to_string();
        Ok(user.clone())
    }

    /// Grant the admin role to an existing user.
    pub fn promote_to_admin(&mut self, id: i64) -> Result<User, AppError> {
        let user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("User not found with ID: {id}")))?;
        user.role = crate::auth::ROLE_ADMIN.to_string();
        Ok(user.clone())
    }

    pub fn set_password_hash(&mut self, id: i64, password_hash: String) -> Result<(), AppError> {
        let user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("User not found with ID: {id}")))?;
        user.password_hash = password_hash;
        Ok(())
    }

    /// Remove a user, returning the deleted record.
    pub fn delete(&mut self, id: i64) -> Result<User, AppError> {
        self.users
            .remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("User not found. User id: {id}")))
    }

    fn validate_unique(
        &self,
        name: &str,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<(), AppError> {
        if let Some(existing) = self.find_by_name(name) {
            if Some(existing.id) != exclude_id {
                return Err(AppError::DuplicateEntity(format!(
                    "User with name {name} already exists."
                )));
            }
        }
        if let Some(existing) = self.find_by_email(email) {
            if Some(existing.id) != exclude_id {
                return Err(AppError::DuplicateEntity(format!(
                    "User with email {email} already exists."
                )));
            }
        }
        Ok(())
    }
}

/// A stored order.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: Option<String>,
}

#[derive(Default)]
pub struct OrderStore {
    orders: HashMap<String, Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, request: CreateOrderRequest) -> Order {
        let id = Uuid::new_v4().to_string();
        let order = Order {
            id: id.clone(),
            title: request.title,
            description: request.description,
            status: None,
        };
        self.orders.insert(id, order.clone());
        order
    }

    pub fn list(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.orders.values().cloned().collect();
        orders.sort_by(|a, b| a.id.cmp(&b.id));
        orders
    }

    pub fn get(&self, id: &str) -> Result<Order, AppError> {
        self.orders
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Order does not exist. order id: {id}")))
    }

    pub fn update(&mut self, request: UpdateOrderRequest) -> Result<Order, AppError> {
        let order = self.orders.get_mut(&request.id).ok_or_else(|| {
            AppError::NotFound(format!("Order does not exist. order id: {}", request.id))
        })?;
        order.title = request.title;
        order.description = request.description;
        order.status = request.status;
        Ok(order.clone())
    }

    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        self.orders
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Order does not exist. order id: {id}")))
    }
}
