//! Graphviz export of the tree shape, enabled by the `graphviz` feature.

use std::fmt::Debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::index::IndexType;
use crate::node::Node;
use crate::orderedtree::OrderedTree;

impl<K, Ix> OrderedTree<K, Ix>
where
    K: Debug,
    Ix: IndexType,
{
    /// Write the tree to `path` as a Graphviz DOT file.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while creating or writing the file.
    pub fn draw(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_dot(&mut out)?;
        out.flush()
    }

    /// Write the tree in DOT format. Nodes are filled with their color and
    /// labelled with their key.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `out`.
    pub fn write_dot<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "digraph OrderedTree {{")?;
        writeln!(out, "    node [shape=circle, style=filled, fontcolor=white];")?;
        let mut stack: Vec<_> = self.root.into_iter().collect();
        while let Some(x) = stack.pop() {
            let node = &self.nodes[x.index()];
            let fill = if node.is_red() { "red" } else { "black" };
            writeln!(
                out,
                "    n{} [label=\"{:?}\", fillcolor={fill}];",
                x.index(),
                node.key()
            )?;
            for child in [node.left(), node.right()].into_iter().flatten() {
                writeln!(out, "    n{} -> n{};", x.index(), child.index())?;
            }
            stack.extend(self.node_ref(x, Node::right));
            stack.extend(self.node_ref(x, Node::left));
        }
        writeln!(out, "}}")
    }
}
