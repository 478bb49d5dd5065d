//! Facade: one call hiding a sequence of calls over several collaborators.
//!
//! Starting a [`Machine`] takes a connected [`RequestManager`], a state request and a
//! start request, in that order. [`ConcreteFacade`] performs the whole sequence behind
//! [`MachineFacade::start_machine`]. The same shape is repeated for a [`Tv`] driven by a
//! [`Remote`].

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    NotRunning,
    Ready,
    Running,
}

#[derive(Debug)]
pub struct Machine {
    state: MachineState,
}

impl Default for Machine {
    fn default() -> Self {
        Self { state: MachineState::Ready }
    }
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn start(&mut self) {
        info!("process starting...");
        self.state = MachineState::Running;
        info!("machine is running");
    }

    pub fn stop(&mut self) {
        self.state = MachineState::NotRunning;
        info!("machine stopped");
    }
}

#[derive(Debug, Default)]
pub struct RequestManager {
    connected: bool,
}

impl RequestManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn connect(&mut self) {
        info!("connecting to terminal...");
        self.connected = true;
    }

    pub fn disconnect(&mut self) {
        info!("disconnecting from terminal...");
        self.connected = false;
    }

    pub fn state_request(&self, machine: &Machine) -> MachineState {
        info!("sending state request...");
        machine.state()
    }

    pub fn start_request(&self, machine: &mut Machine) {
        info!("sending request to start machine");
        machine.start();
    }

    pub fn stop_request(&self, machine: &mut Machine) {
        info!("sending request to stop machine");
        machine.stop();
    }
}

pub trait MachineFacade {
    /// Brings a fresh machine to its running state and reports the final state.
    fn start_machine(&self) -> MachineState;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteFacade;

impl MachineFacade for ConcreteFacade {
    fn start_machine(&self) -> MachineState {
        let mut machine = Machine::new();
        let mut manager = RequestManager::new();

        if !manager.is_connected() {
            manager.connect();
        }

        if manager.state_request(&machine) == MachineState::Ready {
            info!("machine is ready...");
            manager.start_request(&mut machine);
        }

        machine.state()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvState {
    On,
    Off,
}

#[derive(Debug)]
pub struct Tv {
    state: TvState,
}

impl Default for Tv {
    fn default() -> Self {
        Self { state: TvState::Off }
    }
}

impl Tv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TvState {
        self.state
    }

    pub fn turn_on(&mut self) {
        info!("tv is turned on");
        self.state = TvState::On;
    }

    pub fn turn_off(&mut self) {
        info!("tv is turned off");
        self.state = TvState::Off;
    }
}

#[derive(Debug, Default)]
pub struct Remote {
    connected: bool,
}

impl Remote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn connect(&mut self) {
        info!("sending request to connect...");
        self.connected = true;
    }

    pub fn disconnect(&mut self) {
        info!("sending request to disconnect...");
        self.connected = false;
    }

    pub fn status(&self, tv: &Tv) -> TvState {
        info!("sending request about tv status...");
        tv.state()
    }
}

pub trait ManageTv {
    /// Turns a fresh TV on and reports its final state.
    fn turn_on_tv(&self) -> TvState;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RemoteFacade;

impl ManageTv for RemoteFacade {
    fn turn_on_tv(&self) -> TvState {
        let mut tv = Tv::new();
        let mut remote = Remote::new();

        if !remote.is_connected() {
            remote.connect();
        }

        if remote.status(&tv) == TvState::Off {
            info!("trying to turn tv on...");
            tv.turn_on();
            remote.disconnect();
        }

        tv.state()
    }
}
