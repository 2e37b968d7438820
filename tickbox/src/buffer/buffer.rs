use super::Cell;
use crate::types::Rgb;

/// Grid of terminal cells, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Write `text` starting at `(x, y)`, keeping each cell's background.
    /// Characters past the right edge are dropped.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Rgb) {
        for (offset, ch) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(offset) else {
                break;
            };
            let Some(cell) = self.get_mut(x.saturating_add(offset), y) else {
                break;
            };
            cell.char = ch;
            cell.fg = fg;
        }
    }

    /// Cells that differ from `previous`, with their positions.
    /// Buffers of different sizes are treated as entirely changed.
    pub fn diff<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let resized = self.width != previous.width || self.height != previous.height;
        let width = usize::from(self.width.max(1));
        self.cells
            .iter()
            .enumerate()
            .filter(move |(i, cell)| resized || previous.cells.get(*i) != Some(*cell))
            .map(move |(i, cell)| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }
}
