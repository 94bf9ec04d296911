use std::io;

use crate::value::Value;

use super::Array;

/// Leading slots shown by the zero window.
pub const DEFAULT_HEAD: usize = 3;
/// Trailing slots shown by the zero window.
pub const DEFAULT_TAIL: usize = 4;

/// How many leading and trailing slots to show when printing an array.
///
/// The zero window (`PrintWindow::default()`) selects [`DEFAULT_HEAD`] and
/// [`DEFAULT_TAIL`]. Note that the two paths put the tail boundary in
/// different places: the zero window shows slots after `len - tail`, an
/// explicit window shows slots after `len - tail - 1`. With the defaults
/// and ten values that is indices 7, 8 and 9; an explicit `(3, 4)` window
/// would show 6 as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintWindow {
    pub head: usize,
    pub tail: usize,
}

impl PrintWindow {
    pub fn new(head: usize, tail: usize) -> Self {
        PrintWindow { head, tail }
    }

    pub fn is_zero(&self) -> bool {
        self.head == 0 && self.tail == 0
    }

    // slots below the first bound and above the second are shown
    fn bounds(&self, len: usize) -> (isize, isize) {
        let len = len as isize;
        if self.is_zero() {
            (DEFAULT_HEAD as isize, len - DEFAULT_TAIL as isize)
        } else {
            (self.head as isize, len - self.tail as isize - 1)
        }
    }

    fn shows(&self, index: usize, len: usize) -> bool {
        let (head, tail) = self.bounds(len);
        let index = index as isize;
        index < head || index > tail
    }
}

impl Array {
    /// The slots shown through `window`, in ascending index order.
    ///
    /// Empty slots are never shown.
    pub fn window<'a>(&'a self, window: &PrintWindow) -> impl Iterator<Item = (usize, &'a Value)> {
        let window = *window;
        let len = self.len();
        self.slots()
            .iter()
            .enumerate()
            .filter(move |(index, _)| window.shows(*index, len))
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    /// Write one `<index>: <value>` line per slot shown through `window`.
    pub fn print_to<W: io::Write>(&self, window: &PrintWindow, mut writer: W) -> io::Result<()> {
        for (index, value) in self.window(window) {
            writeln!(writer, "{}: {}", index, value)?;
        }
        Ok(())
    }

    /// Print the slots shown through `window` to stdout.
    pub fn print(&self, window: &PrintWindow) -> io::Result<()> {
        let stdout = io::stdout();
        self.print_to(window, stdout.lock())
    }
}
