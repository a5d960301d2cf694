// Binary image format: header parsing, serialization, validation.
//
// Layout of an FSA image:
//   bytes 0..4    cookie1 (magic, little-endian)
//   bytes 4..8    cookie2 (magic, little-endian)
//   byte  8       format version
//   bytes 9..16   reserved (zero)
//   bytes 16..20  node count (u32 LE)
//   bytes 20..24  arc count (u32 LE)
//   then          node table (8-byte records), arc table (8-byte records)
//
// The fixed 24-byte prefix keeps both tables 8-byte aligned, but the
// backing buffer itself may not be; the loader copies into aligned
// vectors before casting.

use bytemuck::Zeroable;

use crate::automaton::{Fsa, FsaArc, NodeSpan, ARC_FINAL};
use crate::FsaError;

/// FSA image magic constants (little-endian).
const COOKIE1: u32 = 0x6672_6F6D; // "morf"
const COOKIE2: u32 = 0x6173_6661; // "afsa"

/// Supported image format version.
const VERSION: u8 = 1;

/// Size of the image header in bytes (excluding the table counts).
pub const HEADER_SIZE: usize = 16;

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

impl Fsa {
    /// Serialize the automaton to its binary image.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            HEADER_SIZE + 8 + self.nodes.len() * 8 + self.arcs.len() * 8,
        );
        out.extend_from_slice(&COOKIE1.to_le_bytes());
        out.extend_from_slice(&COOKIE2.to_le_bytes());
        out.push(VERSION);
        out.extend_from_slice(&[0u8; 7]);
        out.extend_from_slice(&(self.nodes.len() as u32).to_le_bytes());
        out.extend_from_slice(&(self.arcs.len() as u32).to_le_bytes());
        out.extend_from_slice(bytemuck::cast_slice(&self.nodes));
        out.extend_from_slice(bytemuck::cast_slice(&self.arcs));
        out
    }

    /// Load an automaton from its binary image.
    ///
    /// Validates the header, both table bounds, arc targets, flag bits,
    /// and the per-node label ordering that `arc_by_label` relies on.
    pub fn from_bytes(data: &[u8]) -> Result<Self, FsaError> {
        if data.len() < HEADER_SIZE + 8 {
            return Err(FsaError::TooShort {
                expected: HEADER_SIZE + 8,
                actual: data.len(),
            });
        }
        if read_u32(data, 0) != COOKIE1 || read_u32(data, 4) != COOKIE2 {
            return Err(FsaError::InvalidMagic);
        }
        if data[8] != VERSION {
            return Err(FsaError::UnsupportedVersion(data[8]));
        }

        let node_count = read_u32(data, HEADER_SIZE) as usize;
        let arc_count = read_u32(data, HEADER_SIZE + 4) as usize;
        if node_count == 0 {
            return Err(FsaError::EmptyAutomaton);
        }

        let tables_start = HEADER_SIZE + 8;
        let expected = tables_start + node_count * 8 + arc_count * 8;
        if data.len() < expected {
            return Err(FsaError::TooShort {
                expected,
                actual: data.len(),
            });
        }

        // Copy into aligned vectors; the input slice may not be 8-byte
        // aligned for a zero-copy cast.
        let mut nodes = vec![NodeSpan::zeroed(); node_count];
        bytemuck::cast_slice_mut::<NodeSpan, u8>(&mut nodes)
            .copy_from_slice(&data[tables_start..tables_start + node_count * 8]);
        let arcs_start = tables_start + node_count * 8;
        let mut arcs = vec![FsaArc::zeroed(); arc_count];
        bytemuck::cast_slice_mut::<FsaArc, u8>(&mut arcs)
            .copy_from_slice(&data[arcs_start..arcs_start + arc_count * 8]);

        for (i, span) in nodes.iter().enumerate() {
            let first = span.first_arc as usize;
            let end = first + span.arc_count as usize;
            if end > arc_count {
                return Err(FsaError::Corrupt(format!(
                    "node {i} arc span {first}..{end} exceeds arc table ({arc_count})"
                )));
            }
            for w in arcs[first..end].windows(2) {
                if w[0].label >= w[1].label {
                    return Err(FsaError::Corrupt(format!(
                        "node {i} arcs are not strictly label-sorted"
                    )));
                }
            }
        }
        for (i, arc) in arcs.iter().enumerate() {
            if arc.target as usize >= node_count {
                return Err(FsaError::Corrupt(format!(
                    "arc {i} targets node {} beyond node table ({node_count})",
                    arc.target
                )));
            }
            if arc.flags & !ARC_FINAL != 0 || arc._pad != [0; 2] {
                return Err(FsaError::Corrupt(format!(
                    "arc {i} has reserved bits set"
                )));
            }
        }

        Ok(Fsa { nodes, arcs })
    }
}
