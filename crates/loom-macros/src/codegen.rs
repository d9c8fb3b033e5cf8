//! Code generation for the `ui!` and `widget!` macros.
//!
//! Each parsed [`WidgetNode`] expands to a constructor call boxed as
//! `Box<dyn Widget<_>>`, with named attributes turned into a chain of
//! `.with_*` builder calls. Containers thread their child list in as the
//! final positional argument to `::new`, by convention.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::parse::{ChildItem, NamedAttr, UiRoot, WidgetNode};

/// Entry point for the `ui!` macro: a tree of widgets becomes a `Vec` of
/// boxed trait objects.
pub fn generate(root: UiRoot) -> TokenStream {
    render_child_list(&root.items)
}

/// Entry point for the `widget!` macro: a single widget, no enclosing `Vec`.
pub fn generate_single(node: WidgetNode) -> TokenStream {
    render_node(&node)
}

/// Expand one widget node into a boxed constructor expression.
fn render_node(node: &WidgetNode) -> TokenStream {
    let ctor_args = match &node.children {
        None => node.positional_args.iter().map(|a| quote! { #a }).collect(),
        Some(kids) => {
            let mut args: Vec<TokenStream> =
                node.positional_args.iter().map(|a| quote! { #a }).collect();
            args.push(render_child_list(kids));
            args
        }
    };

    let name = &node.name;
    let builder_chain = render_builder_chain(&node.named_attrs);
    quote! {
        Box::new(#name::new(#(#ctor_args),*) #builder_chain) as Box<dyn Widget<_>>
    }
}

/// Expand a sibling list (widgets interleaved with `..expr` splats) into the
/// code that produces a `Vec<Box<dyn Widget<_>>>`.
fn render_child_list(items: &[ChildItem]) -> TokenStream {
    if items.iter().all(|c| matches!(c, ChildItem::Widget(_))) {
        let boxed = items.iter().map(|c| match c {
            ChildItem::Widget(node) => render_node(node),
            ChildItem::Splat(_) => unreachable!("checked above"),
        });
        return quote! { vec![#(#boxed),*] };
    }

    let push_statements = items.iter().map(|item| match item {
        ChildItem::Widget(node) => {
            let boxed = render_node(node);
            quote! { __items.push(#boxed); }
        }
        ChildItem::Splat(expr) => quote! { __items.extend(#expr); },
    });

    quote! {{
        let mut __items: Vec<Box<dyn Widget<_>>> = Vec::new();
        #(#push_statements)*
        __items
    }}
}

/// Turn `name: value` attributes into a `.with_name(value)` call chain.
fn render_builder_chain(attrs: &[NamedAttr]) -> TokenStream {
    let calls = attrs.iter().map(|attr| {
        let setter = format_ident!("with_{}", attr.name);
        let value = &attr.value;
        quote! { .#setter(#value) }
    });
    quote! { #(#calls)* }
}
