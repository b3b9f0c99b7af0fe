//! [`DisplayService`] over the X RandR extension

use core::fmt;

use x11rb::connection::Connection as _;
use x11rb::protocol::randr::{self, ConnectionExt as _, GetScreenResourcesCurrentReply};
use x11rb::rust_connection::RustConnection;

use crate::{
    service::{DisplayService, Result, ServiceError},
    types::{
        Connection, ControllerConfig, ControllerId, ControllerState, Mode, ModeId, Output,
        OutputId, Rotation,
    },
};

/// Oldest RandR version that has `GetScreenResourcesCurrent`
const RANDR_VERSION: (u32, u32) = (1, 3);

fn request_error(err: impl fmt::Display) -> ServiceError {
    ServiceError::Request(err.to_string())
}

/// An open connection to an X server and the screen resources fetched for this run.
///
/// The connection is closed when the value is dropped.
pub struct X11Service {
    conn: RustConnection,
    resources: GetScreenResourcesCurrentReply,
}

impl fmt::Debug for X11Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("X11Service")
            .field("outputs", &format!("<{} outputs>", self.resources.outputs.len()))
            .field("modes", &format!("<{} modes>", self.resources.modes.len()))
            .field("config_timestamp", &self.resources.config_timestamp)
            .finish()
    }
}

impl X11Service {
    /// Connects to `display`, or to `$DISPLAY` if `None`, and fetches the screen resources of
    /// the default screen
    pub fn connect(display: Option<&str>) -> Result<Self> {
        let (conn, screen_num) =
            RustConnection::connect(display).map_err(|e| ServiceError::Connect(e.to_string()))?;
        let root = conn
            .setup()
            .roots
            .get(screen_num)
            .ok_or_else(|| ServiceError::Connect(format!("Screen {} not found", screen_num)))?
            .root;

        let (major, minor) = RANDR_VERSION;
        let version = conn
            .randr_query_version(major, minor)
            .map_err(request_error)?
            .reply()
            .map_err(request_error)?;
        log::debug!(
            "RandR {}.{} on screen {}",
            version.major_version,
            version.minor_version,
            screen_num
        );

        let resources = conn
            .randr_get_screen_resources_current(root)
            .map_err(request_error)?
            .reply()
            .map_err(request_error)?;

        Ok(Self { conn, resources })
    }
}

impl DisplayService for X11Service {
    fn list_outputs(&self) -> Result<Vec<Output>> {
        let mut result = Vec::with_capacity(self.resources.outputs.len());

        for &output in &self.resources.outputs {
            let info = self
                .conn
                .randr_get_output_info(output, self.resources.config_timestamp)
                .map_err(request_error)?
                .reply()
                .map_err(request_error)?;

            let connection = match info.connection {
                randr::Connection::CONNECTED => Connection::Connected,
                randr::Connection::DISCONNECTED => Connection::Disconnected,
                _ => Connection::Unknown,
            };

            let output = Output {
                id: OutputId(output),
                name: String::from_utf8_lossy(&info.name).into_owned(),
                connection,
                modes: info.modes.into_iter().map(ModeId).collect(),
                controller: (info.crtc != x11rb::NONE).then_some(ControllerId(info.crtc)),
            };
            log::trace!("{}", output);
            result.push(output);
        }

        Ok(result)
    }

    fn list_modes(&self) -> Result<Vec<Mode>> {
        Ok(self
            .resources
            .modes
            .iter()
            .map(|info| {
                Mode::new(
                    ModeId(info.id),
                    u32::from(info.width),
                    u32::from(info.height),
                )
            })
            .collect())
    }

    fn controller_state(&self, controller: ControllerId) -> Result<ControllerState> {
        let info = self
            .conn
            .randr_get_crtc_info(controller.0, self.resources.config_timestamp)
            .map_err(request_error)?
            .reply()
            .map_err(request_error)?;

        Ok(ControllerState {
            controller,
            mode: (info.mode != x11rb::NONE).then_some(ModeId(info.mode)),
            outputs: info.outputs.into_iter().map(OutputId).collect(),
        })
    }

    fn set_controller_config(&self, controller: ControllerId, config: &ControllerConfig) -> Result {
        let outputs: Vec<randr::Output> = config.outputs.iter().map(|output| output.0).collect();
        let rotation = match config.rotation {
            Rotation::Rotate0 => randr::Rotation::ROTATE0,
        };

        let reply = self
            .conn
            .randr_set_crtc_config(
                controller.0,
                x11rb::CURRENT_TIME,
                self.resources.config_timestamp,
                config.position.x,
                config.position.y,
                config.mode.0,
                rotation,
                &outputs,
            )
            .map_err(request_error)?
            .reply()
            .map_err(request_error)?;

        if reply.status == randr::SetConfig::SUCCESS {
            Ok(())
        } else {
            log::error!("SetCrtcConfig returned status {:?}", reply.status);
            Err(ServiceError::Rejected(format!("{:?}", reply.status)))
        }
    }
}
