/// Cell is the typed view of one byte in the grid buffer.
/// The buffer itself stores `0` for dead and `1` for alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Byte stored in the grid buffer
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Interpret a buffer byte; anything non-zero reads as alive
    pub const fn from_byte(byte: u8) -> Self {
        if byte == 0 { Cell::Dead } else { Cell::Alive }
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
