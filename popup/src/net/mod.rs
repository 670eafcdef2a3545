//! Messaging between the popup and the active tab's page agent.

pub mod tabs;
