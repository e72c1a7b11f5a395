#![deny(warnings)]

static WHITE: &str = " \t\r\n";
static DIGITS: &str = "0123456789";

// Buffered char reader with backtracking. Consumed chars accumulate in an
// internal buffer until they're extracted as a lexeme or ignored.
pub struct Scanner<I: Iterator<Item = char>> {
    src: I,
    buf: Vec<char>,
    pos: isize,
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        self.pos += 1;
        while self.pos >= self.buf.len() as isize {
            match self.src.next() {
                Some(chr) => self.buf.push(chr),
                None => break,
            }
        }
        let blen = self.buf.len() as isize;
        if self.pos > blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(source: I) -> Scanner<I> {
        Scanner { src: source, buf: Vec::new(), pos: -1 }
    }

    // Position within the unextracted buffer, -1 before the first char.
    pub fn pos(&self) -> isize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > self.buf.len() as isize {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<char> {
        if self.pos < 0 || self.pos >= self.buf.len() as isize {
            return None;
        }
        Some(self.buf[self.pos as usize])
    }

    pub fn peek(&mut self) -> Option<char> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    // Advance only if the next char is in the 'any' set.
    pub fn accept(&mut self, any: &str) -> Option<char> {
        let backtrack = self.pos;
        if let Some(next) = self.next() {
            if any.contains(next) {
                return Some(next);
            }
        }
        self.pos = backtrack;
        None
    }

    // Consume a run of chars from the 'over' set, true if any was consumed.
    pub fn skip_all(&mut self, over: &str) -> bool {
        let mut advanced = false;
        while self.accept(over).is_some() {
            advanced = true;
        }
        advanced
    }

    // Take everything consumed so far out of the buffer as a lexeme.
    pub fn extract(&mut self) -> String {
        let n = self.buf.len().min((self.pos + 1) as usize);
        let lexeme = self.buf[..n].iter().collect();
        self.buf = self.buf[n..].to_vec();
        self.pos = -1;
        lexeme
    }

    // Drop everything consumed so far.
    pub fn ignore(&mut self) {
        let n = self.buf.len().min((self.pos + 1) as usize);
        self.buf = self.buf[n..].to_vec();
        self.pos = -1;
    }

    pub fn skip_ws(&mut self) {
        if self.skip_all(WHITE) {
            self.ignore();
        }
    }

    // Scan a maximal digit run with at most one embedded decimal point.
    // Signs are never part of the number, a trailing '.' is left behind.
    pub fn scan_number(&mut self) -> Option<String> {
        if !self.skip_all(DIGITS) {
            return None;
        }
        let backtrack = self.pos;
        if self.accept(".").is_some() && !self.skip_all(DIGITS) {
            self.set_pos(backtrack);
        }
        Some(self.extract())
    }
}
