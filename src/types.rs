use core::fmt;

/// Identifier of a mode in the display subsystem's mode catalog
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModeId(pub u32);

/// Identifier of an output (connector)
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OutputId(pub u32);

/// Identifier of a display controller (CRTC)
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControllerId(pub u32);

macro_rules! display_id {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:#x}", self.0)
            }
        }
    };
}

display_id!(ModeId);
display_id!(OutputId);
display_id!(ControllerId);

/// Connection status of an output
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Connection {
    Connected,
    #[default]
    Disconnected,
    Unknown,
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Connection::Connected => write!(f, "connected"),
            Connection::Disconnected => write!(f, "disconnected"),
            Connection::Unknown => write!(f, "unknown"),
        }
    }
}

/// A display connector as reported by the display service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub id: OutputId,
    pub name: String,
    pub connection: Connection,
    /// Modes this output advertises as supported
    pub modes: Vec<ModeId>,
    /// The controller driving this output, if it is lit
    pub controller: Option<ControllerId>,
}

impl Output {
    pub fn is_connected(&self) -> bool {
        self.connection == Connection::Connected
    }

    pub fn supports(&self, mode: ModeId) -> bool {
        self.modes.contains(&mode)
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Output {{ id: {}, name: {}, connection: {}, modes: {} }}",
            self.id,
            self.name,
            self.connection,
            self.modes.len()
        )
    }
}

/// An entry of the mode catalog
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Mode {
    pub id: ModeId,
    pub width: u32,
    pub height: u32,
}

impl Mode {
    pub fn new(id: ModeId, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.resolution(), self.id)
    }
}

/// Contains the resolution of a mode
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Offset of a controller's viewport within the screen
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Controller rotation. Only the unrotated state is ever requested.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    Rotate0,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rotation::Rotate0 => write!(f, "normal"),
        }
    }
}

/// What a controller is currently doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerState {
    pub controller: ControllerId,
    /// The active mode, `None` if the controller is disabled
    pub mode: Option<ModeId>,
    /// Outputs currently driven by the controller
    pub outputs: Vec<OutputId>,
}

/// A single mode-change request for a controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    pub mode: ModeId,
    pub position: Position,
    pub rotation: Rotation,
    pub outputs: Vec<OutputId>,
}

/// Aspect ratio class of a mode
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AspectClass {
    /// 4:3
    Standard,
    /// 16:10, 16:9 or 21:9
    Widescreen,
    Unclassified,
}

impl AspectClass {
    pub fn is_widescreen(&self) -> bool {
        *self == AspectClass::Widescreen
    }
}

impl fmt::Display for AspectClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AspectClass::Standard => write!(f, "standard"),
            AspectClass::Widescreen => write!(f, "widescreen"),
            AspectClass::Unclassified => write!(f, "unclassified"),
        }
    }
}
