use crate::huffman::{HuffmanNode, HuffmanTree};

/// Prefix codes for each byte value, derived from root-to-leaf paths.
///
/// Index is the symbol, values are the code bits in the lower bits of the
/// u64 and the amount of bits in the u8. Symbols without a leaf keep a zero
/// length. No code is a prefix of another, guaranteed structurally by
/// deriving codes from tree paths.
pub struct CodeTable {
    codes: Vec<(u64, u8)>,
}

impl CodeTable {
    /// Walk the tree depth-first, recording the accumulated path at each
    /// leaf. Left edges contribute a 0 bit, right edges a 1 bit.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable {
            codes: vec![(0, 0); 256],
        };
        match tree.root() {
            // A single leaf has no 0/1 split to walk. The convention is the
            // 1-bit code `0`; the decoder recovers the run length from the
            // stored count rather than the bitstream.
            HuffmanNode::Leaf { symbol, .. } => {
                table.codes[*symbol as usize] = (0, 1);
            }
            root => table.assign(root, 0, 0),
        }
        table
    }

    fn assign(&mut self, node: &HuffmanNode, code: u64, depth: u8) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                self.codes[*symbol as usize] = (code, depth);
            }
            HuffmanNode::Internal { left, right, .. } => {
                // A leaf at depth d requires a total input weight on the
                // order of Fibonacci(d), so 64-bit codes cover any buffer
                // below tens of terabytes
                debug_assert!(depth < 64);
                self.assign(left, code << 1, depth + 1);
                self.assign(right, (code << 1) | 1, depth + 1);
            }
        }
    }

    /// The `(bits, bit count)` code assigned to `symbol`.
    pub fn code_of(&self, symbol: u8) -> (u64, u8) {
        self.codes[symbol as usize]
    }

    /// Iterate `(symbol, bits, bit count)` over symbols that have a code.
    pub fn assigned(&self) -> impl Iterator<Item = (u8, u64, u8)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, &(_, num_bits))| num_bits > 0)
            .map(|(symbol, &(bits, num_bits))| (symbol as u8, bits, num_bits))
    }
}
