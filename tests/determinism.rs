use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tiny_step_actor::{Actor, ActorContext, ActorError, Kernel, Pid};

type Trace = Rc<RefCell<Vec<(Pid, u64)>>>;

/// Passes values around its peers until they grow past 1000.
struct Gossip {
    peers: Vec<Pid>,
    trace: Trace,
}

impl Actor<u64> for Gossip {
    fn behave(&mut self, value: u64, ctx: &mut ActorContext<'_, u64>) -> Result<(), ActorError> {
        self.trace.borrow_mut().push((ctx.pid(), value));

        if value % 7 == 0 {
            return Err(anyhow::anyhow!("{} refuses multiples of seven", ctx.pid()).into());
        }
        if value % 11 == 0 {
            ctx.stop();
            return Ok(());
        }
        if value < 1000 && !self.peers.is_empty() {
            let peer = self.peers[(value as usize) % self.peers.len()];
            ctx.send(peer, value * 3 + 1);
            ctx.send(ctx.pid(), value * 2 + 1);
        }
        Ok(())
    }
}

enum Op {
    Spawn,
    Send(usize, u64),
    Kill(usize),
    Step,
}

fn script(seed: u64, len: usize) -> Vec<Op> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ops = vec![Op::Spawn];
    for _ in 0..len {
        let op = match rng.random_range(0..10) {
            0..=1 => Op::Spawn,
            2..=5 => Op::Send(rng.random_range(0..64), rng.random_range(1..200)),
            6 => Op::Kill(rng.random_range(0..64)),
            _ => Op::Step,
        };
        ops.push(op);
    }
    ops
}

fn replay(ops: &[Op]) -> (Vec<(Pid, u64)>, Vec<Pid>) {
    let trace = Trace::default();
    let mut kernel = Kernel::<u64>::default();
    let mut spawned: Vec<Pid> = Vec::new();

    for op in ops {
        match op {
            Op::Spawn => {
                let peers = spawned.clone();
                let trace = Rc::clone(&trace);
                let pid = kernel
                    .spawn(move |_pid, ()| Ok(Gossip { peers, trace }), ())
                    .unwrap();
                spawned.push(pid);
            }
            Op::Send(idx, value) => kernel.send(spawned[idx % spawned.len()], *value),
            Op::Kill(idx) => kernel.kill(spawned[idx % spawned.len()]),
            Op::Step => {
                kernel.step();
            }
        }
    }
    kernel.run();

    let alive = spawned.into_iter().filter(|pid| kernel.is_alive(*pid)).collect();
    let trace = trace.borrow().clone();
    (trace, alive)
}

#[test]
fn same_script_same_trace() {
    for seed in 0..16 {
        let ops = script(seed, 300);
        let first = replay(&ops);
        let second = replay(&ops);
        assert!(!first.0.is_empty(), "seed {seed} produced no deliveries");
        assert_eq!(first, second, "seed {seed} diverged");
    }
}

#[test]
fn pids_follow_spawn_order() {
    let ops = script(42, 500);
    let spawns = ops.iter().filter(|op| matches!(op, Op::Spawn)).count() as u64;

    let mut kernel = Kernel::<u64>::default();
    let trace = Trace::default();
    let mut last = Pid::new(0);
    for _ in 0..spawns {
        let trace = Rc::clone(&trace);
        let pid = kernel
            .spawn(move |_pid, ()| Ok(Gossip { peers: Vec::new(), trace }), ())
            .unwrap();
        assert_eq!(pid.get(), last.get() + 1);
        kernel.kill(pid);
        last = pid;
    }
    assert_eq!(kernel.live_count(), 0);
}

#[test]
fn messages_from_one_sender_keep_their_order() {
    let trace = Trace::default();
    let mut kernel = Kernel::<u64>::default();
    let target_trace = Rc::clone(&trace);
    let target = kernel
        .spawn(move |_pid, ()| Ok(Gossip { peers: Vec::new(), trace: target_trace }), ())
        .unwrap();

    let values: Vec<u64> = (1..100).filter(|v| v % 7 != 0 && v % 11 != 0).collect();
    for value in &values {
        kernel.send(target, *value);
    }
    kernel.run();

    let received: Vec<u64> = trace.borrow().iter().map(|(_, value)| *value).collect();
    assert_eq!(received, values);
}
