//! In-memory display service used by the integration tests
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use modepick::{
    Connection, ControllerConfig, ControllerId, ControllerState, DisplayService, Mode, ModeId,
    Output, OutputId, ServiceError,
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn output(id: u32, name: &str, connection: Connection, modes: &[u32]) -> Output {
    Output {
        id: OutputId(id),
        name: name.to_string(),
        connection,
        modes: modes.iter().copied().map(ModeId).collect(),
        controller: Some(ControllerId(id + 100)),
    }
}

pub fn connected(id: u32, name: &str, modes: &[u32]) -> Output {
    output(id, name, Connection::Connected, modes)
}

pub fn disconnected(id: u32, name: &str) -> Output {
    output(id, name, Connection::Disconnected, &[])
}

pub fn mode(id: u32, width: u32, height: u32) -> Mode {
    Mode::new(ModeId(id), width, height)
}

/// A fake display server that records every mode change
#[derive(Debug, Default)]
pub struct FakeService {
    pub outputs: Vec<Output>,
    pub modes: Vec<Mode>,
    pub controllers: RefCell<HashMap<ControllerId, ControllerState>>,
    pub requests: RefCell<Vec<(ControllerId, ControllerConfig)>>,
    pub reject: Cell<bool>,
}

impl FakeService {
    /// Every output with a controller gets one, driving only that output in `current` mode
    pub fn new(outputs: Vec<Output>, modes: Vec<Mode>, current: Option<u32>) -> Self {
        let controllers = outputs
            .iter()
            .filter_map(|output| {
                output.controller.map(|controller| {
                    let state = ControllerState {
                        controller,
                        mode: current.map(ModeId),
                        outputs: vec![output.id],
                    };
                    (controller, state)
                })
            })
            .collect();

        Self {
            outputs,
            modes,
            controllers: RefCell::new(controllers),
            ..Default::default()
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl DisplayService for FakeService {
    fn list_outputs(&self) -> Result<Vec<Output>, ServiceError> {
        Ok(self.outputs.clone())
    }

    fn list_modes(&self) -> Result<Vec<Mode>, ServiceError> {
        Ok(self.modes.clone())
    }

    fn controller_state(&self, controller: ControllerId) -> Result<ControllerState, ServiceError> {
        self.controllers
            .borrow()
            .get(&controller)
            .cloned()
            .ok_or_else(|| ServiceError::Request(format!("BadCrtc {}", controller)))
    }

    fn set_controller_config(
        &self,
        controller: ControllerId,
        config: &ControllerConfig,
    ) -> Result<(), ServiceError> {
        self.requests.borrow_mut().push((controller, config.clone()));

        if self.reject.get() {
            return Err(ServiceError::Rejected("Failed".to_string()));
        }

        let mut controllers = self.controllers.borrow_mut();
        let state = controllers
            .get_mut(&controller)
            .ok_or_else(|| ServiceError::Request(format!("BadCrtc {}", controller)))?;
        state.mode = Some(config.mode);
        state.outputs = config.outputs.clone();
        Ok(())
    }
}
