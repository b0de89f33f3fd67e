//! Nyassobi DOM
//!
//! Tree types shared by the content renderer:
//! - [`GenericNode`]: the permissive parse of a CMS fragment
//! - [`PropertyMap`] / [`PropValue`]: normalized element and widget properties
//! - [`UiNode`]: the typed tree handed to page views

mod node;
mod props;
mod ui;

pub use node::{Attribute, ElementData, GenericNode};
pub use props::{PropValue, PropertyMap};
pub use ui::{ComponentRef, TitleContent, UiNode};
