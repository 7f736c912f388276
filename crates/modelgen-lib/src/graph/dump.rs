//! Human-readable rendering of a `TypeGraph`.
//!
//! ```text
//! Page (page) #1
//!   Title (title): text
//! Seo (seo) #3 [mixin]
//! Article (article) #2 extends Page with Seo
//! ```

use std::fmt::{self, Write as _};

use modelgen_core::Colors;

use super::{TypeGraph, TypeModel};

pub struct GraphPrinter<'a> {
    graph: &'a TypeGraph,
    colors: Colors,
    properties: bool,
}

impl<'a> GraphPrinter<'a> {
    pub fn new(graph: &'a TypeGraph) -> Self {
        Self {
            graph,
            colors: Colors::OFF,
            properties: true,
        }
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    /// Include property lines under each type. On by default.
    pub fn properties(mut self, value: bool) -> Self {
        self.properties = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> fmt::Result {
        for ty in self.graph.iter() {
            self.format_type(w, ty)?;
            if self.properties {
                self.format_properties(w, ty)?;
            }
        }
        Ok(())
    }

    fn format_type(&self, w: &mut String, ty: &TypeModel) -> fmt::Result {
        let c = &self.colors;
        write!(
            w,
            "{}{}{} {}({}) #{}{}",
            c.blue,
            ty.name(),
            c.reset,
            c.dim,
            ty.alias(),
            ty.id(),
            c.reset
        )?;

        if let Some(base) = self.graph.base_type(ty) {
            write!(w, " extends {}{}{}", c.blue, base.name(), c.reset)?;
        }

        let mut mixins = self.graph.mixin_types(ty).peekable();
        if mixins.peek().is_some() {
            w.write_str(" with ")?;
            for (i, mixin) in mixins.enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }
                write!(w, "{}{}{}", c.blue, mixin.name(), c.reset)?;
            }
        }

        if ty.is_mixin() {
            write!(w, " {}[mixin]{}", c.yellow, c.reset)?;
        }

        writeln!(w)
    }

    fn format_properties(&self, w: &mut String, ty: &TypeModel) -> fmt::Result {
        let c = &self.colors;
        for prop in ty.properties() {
            writeln!(
                w,
                "  {} {}({}){}: {}{}{}",
                prop.name, c.dim, prop.alias, c.reset, c.green, prop.value_type, c.reset
            )?;
        }
        Ok(())
    }
}
