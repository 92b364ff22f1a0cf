//! Command handlers for the confex CLI

pub(crate) mod describe;
pub(crate) mod render;

pub(crate) use describe::handle_describe_type_command;
pub(crate) use render::{handle_render_command, RenderArgs};
