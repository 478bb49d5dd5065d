use micro_patterns::facade::{
    ConcreteFacade, Machine, MachineFacade, MachineState, ManageTv, Remote, RemoteFacade, RequestManager, Tv, TvState,
};

fn main() {
    micro_patterns::init_tracing().expect("setting default subscriber failed");

    // without a facade, the caller drives every step
    let mut machine = Machine::new();
    let mut manager = RequestManager::new();
    if !manager.is_connected() {
        manager.connect();
    }
    if manager.state_request(&machine) == MachineState::Ready {
        manager.start_request(&mut machine);
    }
    println!("machine state: {:?}", machine.state());

    println!("machine state through facade: {:?}", ConcreteFacade.start_machine());

    println!();
    let mut tv = Tv::new();
    let mut remote = Remote::new();
    if !remote.is_connected() {
        remote.connect();
    }
    if remote.status(&tv) == TvState::Off {
        tv.turn_on();
        remote.disconnect();
    }
    println!("tv state: {:?}", tv.state());

    println!("tv state through facade: {:?}", RemoteFacade.turn_on_tv());
}
