//! Lexical modes and the mode stack.
//!
//! The active mode decides which rule set scans the next lexeme. Openers
//! push a [`Frame`], closers pop one. The floor frame is [`Mode::Default`]
//! and is never popped, so there is always exactly one active mode.
//!
//! Template flags are derived from the frames on the stack rather than
//! toggled by individual delimiters. An inner string template closing
//! inside an XML interpolation therefore leaves the outer literal's
//! `IN_TEMPLATE` bit intact.

use bitflags::bitflags;
use smallvec::SmallVec;

/// Default cap on stack depth, floor frame included.
pub const DEFAULT_MAX_DEPTH: u32 = 256;

/// A named lexical context with its own rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Default,
    Xml,
    XmlTag,
    DoubleQuotedXmlString,
    SingleQuotedXmlString,
    XmlPi,
    XmlComment,
    /// The rest of a `#` documentation line.
    DocTemplate,
    /// A `# +` line up to the separator after the parameter name.
    DocParam,
    TripleBacktickCode,
    DoubleBacktickCode,
    SingleBacktickCode,
    DeprecatedTemplate,
    StringTemplate,
    /// Code scanned with default rules inside `${`, until the `}` at brace
    /// depth zero.
    Expression { depth: u32 },
}

impl Mode {
    /// Modes that can only be reached from inside an XML literal.
    pub fn is_xml_family(self) -> bool {
        matches!(
            self,
            Self::Xml
                | Self::XmlTag
                | Self::DoubleQuotedXmlString
                | Self::SingleQuotedXmlString
                | Self::XmlPi
                | Self::XmlComment
        )
    }

    /// Modes scanned with the code rule set.
    pub fn is_code(self) -> bool {
        matches!(self, Self::Default | Self::Expression { .. })
    }

    /// Modes that end with the line they started on.
    pub fn is_documentation(self) -> bool {
        matches!(self, Self::DocTemplate | Self::DocParam)
    }

    /// Inline code opened by a backtick run.
    pub fn is_code_span(self) -> bool {
        matches!(
            self,
            Self::TripleBacktickCode | Self::DoubleBacktickCode | Self::SingleBacktickCode
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Xml => "XML",
            Self::XmlTag => "XML_TAG",
            Self::DoubleQuotedXmlString => "DOUBLE_QUOTED_XML_STRING",
            Self::SingleQuotedXmlString => "SINGLE_QUOTED_XML_STRING",
            Self::XmlPi => "XML_PI",
            Self::XmlComment => "XML_COMMENT",
            Self::DocTemplate => "DOC_TEMPLATE",
            Self::DocParam => "DOC_PARAMETER",
            Self::TripleBacktickCode => "TRIPLE_BACKTICK_CODE",
            Self::DoubleBacktickCode => "DOUBLE_BACKTICK_CODE",
            Self::SingleBacktickCode => "SINGLE_BACKTICK_CODE",
            Self::DeprecatedTemplate => "DEPRECATED_TEMPLATE",
            Self::StringTemplate => "STRING_TEMPLATE",
            Self::Expression { .. } => "EXPRESSION",
        }
    }
}

/// One entry on the mode stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    pub mode: Mode,
    /// Byte offset of the lexeme that pushed this frame.
    pub open: u32,
}

bitflags! {
    /// Cross-cutting template state derived from the open frames.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TemplateFlags: u8 {
        /// Inside an XML literal or string template; `${` interpolates.
        const IN_TEMPLATE = 1 << 0;
        const IN_DOC_TEMPLATE = 1 << 1;
        const IN_DEPRECATED_TEMPLATE = 1 << 2;
    }
}

impl TemplateFlags {
    fn contributed_by(mode: Mode) -> Self {
        match mode {
            Mode::Xml | Mode::StringTemplate => Self::IN_TEMPLATE,
            Mode::DocTemplate | Mode::DocParam => Self::IN_DOC_TEMPLATE,
            Mode::DeprecatedTemplate => Self::IN_DEPRECATED_TEMPLATE,
            _ => Self::empty(),
        }
    }
}

/// Stack of active modes with a permanent [`Mode::Default`] floor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeStack {
    frames: SmallVec<[Frame; 8]>,
    flags: TemplateFlags,
    max_depth: u32,
}

impl ModeStack {
    pub fn new(max_depth: u32) -> Self {
        let mut frames = SmallVec::new();
        frames.push(Frame {
            mode: Mode::Default,
            open: 0,
        });
        Self {
            frames,
            flags: TemplateFlags::empty(),
            max_depth: max_depth.max(1),
        }
    }

    /// The active mode.
    #[inline]
    pub fn current(&self) -> Mode {
        self.top().mode
    }

    #[inline]
    fn top(&self) -> Frame {
        // The floor frame is never removed.
        self.frames[self.frames.len() - 1]
    }

    /// The mode of the frame below the active one, if any.
    pub fn parent(&self) -> Option<Mode> {
        let len = self.frames.len();
        (len > 1).then(|| self.frames[len - 2].mode)
    }

    /// Replace the active mode in place, keeping its opener offset.
    ///
    /// Used to update the brace depth of an expression frame, and to turn
    /// a parameter line into a documentation line after its separator.
    pub fn set_current(&mut self, mode: Mode) {
        let last = self.frames.len() - 1;
        self.frames[last].mode = mode;
        self.recompute_flags();
    }

    /// Number of frames, floor included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// `true` when only the floor frame remains.
    #[inline]
    pub fn is_floor(&self) -> bool {
        self.frames.len() == 1
    }

    pub fn flags(&self) -> TemplateFlags {
        self.flags
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Push a frame. Returns `false` and leaves the stack unchanged if the
    /// depth limit would be exceeded.
    #[must_use]
    pub fn push(&mut self, mode: Mode, open: u32) -> bool {
        if self.frames.len() >= self.max_depth as usize {
            return false;
        }
        self.frames.push(Frame { mode, open });
        self.flags |= TemplateFlags::contributed_by(mode);
        true
    }

    /// Pop the active frame. The floor is never popped.
    pub fn pop(&mut self) -> Option<Frame> {
        if self.is_floor() {
            return None;
        }
        let frame = self.frames.pop();
        self.recompute_flags();
        frame
    }

    /// Pop frames up to and including the nearest frame in `mode`.
    ///
    /// Does nothing if no such frame is open.
    pub fn unwind_past(&mut self, mode: Mode) {
        if let Some(index) = self.frames.iter().rposition(|f| f.mode == mode) {
            if index > 0 {
                self.frames.truncate(index);
                self.recompute_flags();
            }
        }
    }

    /// Outermost frame above the floor, if any.
    pub fn outermost_open(&self) -> Option<Frame> {
        self.frames.get(1).copied()
    }

    /// Drop every frame above the floor.
    pub fn reset(&mut self) {
        self.frames.truncate(1);
        self.flags = TemplateFlags::empty();
    }

    /// Frames from floor to top.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    fn recompute_flags(&mut self) {
        self.flags = self
            .frames
            .iter()
            .fold(TemplateFlags::empty(), |acc, f| {
                acc | TemplateFlags::contributed_by(f.mode)
            });
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
