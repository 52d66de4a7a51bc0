//! Recipe storage and shopping list generation for a chat bot
//!
//! The pure core lives in [`ingredients`]: [`ingredients::parse`] turns free
//! text into ingredient records and [`ingredients::aggregate`] merges them
//! across recipes. [`commands`] wires that core to SQLite storage and renders
//! [`reply::Reply`] values for whatever chat transport sits in front.

pub mod commands;
pub mod config;
pub mod controllers;
pub mod db;
pub mod error;
pub mod ingredients;
pub mod models;
pub mod reply;
