//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/db/schema.sql`. The constraint names
//! declared there are part of the error contract; see
//! [`crate::domain::translation`].

diesel::table! {
    /// Registered users. `username` and `email` are unique.
    users (id) {
        id -> Int4,
        #[max_length = 20]
        username -> Varchar,
        #[max_length = 255]
        email -> Text,
        #[max_length = 255]
        password -> Varchar,
    }
}

diesel::table! {
    /// Todo items, each owned by the user who created it.
    todo (id) {
        id -> Int4,
        #[max_length = 255]
        title -> Varchar,
        description -> Text,
        /// References `users.id` through `todo_creator_id_fkey`.
        creator_id -> Int4,
        completed -> Bool,
    }
}

diesel::table! {
    /// Assignment join table keyed by `todo_user_pkey`.
    todo_user (todo_id, user_id) {
        /// References `todo.id` through `todo_user_todo_id_fkey`.
        todo_id -> Int4,
        /// References `users.id` through `todo_user_user_id_fkey`.
        user_id -> Int4,
    }
}

diesel::joinable!(todo -> users (creator_id));
diesel::joinable!(todo_user -> todo (todo_id));
diesel::joinable!(todo_user -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, todo, todo_user);
