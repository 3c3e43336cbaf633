#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod bridge;
pub mod command;
pub mod document;
pub mod element;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod tools;
pub mod widgets;

pub use app::PaintApp;
pub use bridge::{BridgeHandle, HostHooks, LogBridge, NativeBridge};
pub use command::Command;
pub use document::Document;
pub use element::{Shape, ShapeId};
pub use renderer::Renderer;
pub use tools::{Tool, ToolChoice, ToolType};
