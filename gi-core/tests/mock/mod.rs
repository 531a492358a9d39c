/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Each test binary uses a different subset.
#![allow(dead_code)]

pub mod classes;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gi_core::meta::error::ForeignError;
use gi_core::meta::{Value, ValueType};
use gi_core::obj::{ConstructParam, HandlerId, InterfaceRef, ObjectInterface, ObjectPtr, SignalHandler};
use gi_core::registry::{ClassInfo, SignalInfo};
use gi_core::sys::{AllocError, AllocKind, Allocator, HostAllocator, ManagedPtr, RawPtr};

/// One call into the foreign layer, as observed by [`MockInterface`].
#[derive(Clone, PartialEq, Debug)]
pub enum Call {
    Get(String),
    Set(String, Value),
    New {
        class: String,
        params: Vec<(String, Value)>,
    },
    Connect {
        signal: String,
        after: bool,
    },
}

struct Connection {
    instance: RawPtr,
    signal: String,
    handler: SignalHandler,
}

/// In-memory object system recording every call.
#[derive(Default)]
pub struct MockInterface {
    calls: RefCell<Vec<Call>>,
    properties: RefCell<HashMap<(RawPtr, String), Value>>,
    connections: RefCell<Vec<Connection>>,
    failing_property: RefCell<Option<String>>,
    fail_construction: Cell<bool>,
    next_object: Cell<usize>,
    allocator: CountingAllocator,
}

impl MockInterface {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn as_interface(self: &Rc<Self>) -> InterfaceRef {
        self.clone()
    }

    /// Creates an instance without going through construction.
    pub fn spawn(&self) -> ObjectPtr {
        let index = self.next_object.get() + 1;
        self.next_object.set(index);

        // Fake addresses are never dereferenced.
        ObjectPtr::new((0x1000 + index * 0x10) as RawPtr).expect("non-null fake address")
    }

    /// Makes every subsequent write to `name` fail.
    pub fn fail_on_set(&self, name: &str) {
        *self.failing_property.borrow_mut() = Some(name.to_string());
    }

    pub fn fail_construction(&self) {
        self.fail_construction.set(true);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Stored value, bypassing the recorded interface.
    pub fn stored(&self, obj: ObjectPtr, name: &str) -> Option<Value> {
        self.properties
            .borrow()
            .get(&(obj.as_ptr(), name.to_string()))
            .cloned()
    }

    /// Writes a value directly, bypassing the recorded interface and any type checks.
    pub fn store(&self, obj: ObjectPtr, name: &str, value: Value) {
        self.properties
            .borrow_mut()
            .insert((obj.as_ptr(), name.to_string()), value);
    }

    /// Invokes all handlers connected to `signal` on `instance`, in connection order. Returns the last handler's result.
    pub fn emit(&self, instance: RawPtr, signal: &str, args: &[Value]) -> Option<Value> {
        let mut connections = self.connections.borrow_mut();

        let mut result = None;
        for conn in connections.iter_mut() {
            if conn.instance == instance && conn.signal == signal {
                result = (conn.handler)(args);
            }
        }
        result
    }

    pub fn connection_count(&self) -> usize {
        self.connections.borrow().len()
    }

    pub fn counting_allocator(&self) -> &CountingAllocator {
        &self.allocator
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn add_connection(
        &self,
        instance: RawPtr,
        signal: &SignalInfo,
        handler: SignalHandler,
        after: bool,
    ) -> Result<HandlerId, ForeignError> {
        self.record(Call::Connect {
            signal: signal.name().to_string(),
            after,
        });

        let mut connections = self.connections.borrow_mut();
        connections.push(Connection {
            instance,
            signal: signal.name().to_string(),
            handler,
        });
        Ok(HandlerId(connections.len() as u64))
    }
}

impl ObjectInterface for MockInterface {
    fn get_property(&self, obj: ObjectPtr, name: &str, _ty: ValueType) -> Result<Value, ForeignError> {
        self.record(Call::Get(name.to_string()));

        Ok(self.stored(obj, name).unwrap_or_default())
    }

    fn set_property(&self, obj: ObjectPtr, name: &str, value: Value) -> Result<(), ForeignError> {
        self.record(Call::Set(name.to_string(), value.clone()));

        if self.failing_property.borrow().as_deref() == Some(name) {
            return Err(ForeignError::new("mock-error-quark", 1, format!("cannot set `{name}`")));
        }

        self.properties
            .borrow_mut()
            .insert((obj.as_ptr(), name.to_string()), value);
        Ok(())
    }

    fn new_object(
        &self,
        class: &'static ClassInfo,
        params: Vec<ConstructParam>,
    ) -> Result<ObjectPtr, ForeignError> {
        self.record(Call::New {
            class: class.name().to_string(),
            params: params
                .iter()
                .map(|p| (p.name.to_string(), p.value.clone()))
                .collect(),
        });

        if self.fail_construction.get() {
            return Err(ForeignError::new("mock-error-quark", 2, "construction refused"));
        }

        let obj = self.spawn();
        for param in params {
            self.properties
                .borrow_mut()
                .insert((obj.as_ptr(), param.name.to_string()), param.value);
        }
        Ok(obj)
    }

    fn connect(
        &self,
        instance: RawPtr,
        signal: &SignalInfo,
        handler: SignalHandler,
    ) -> Result<HandlerId, ForeignError> {
        self.add_connection(instance, signal, handler, false)
    }

    fn connect_after(
        &self,
        instance: RawPtr,
        signal: &SignalInfo,
        handler: SignalHandler,
    ) -> Result<HandlerId, ForeignError> {
        self.add_connection(instance, signal, handler, true)
    }

    fn allocator(&self) -> &dyn Allocator {
        &self.allocator
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Host allocator that counts its invocations.
#[derive(Default)]
pub struct CountingAllocator {
    count: Cell<usize>,
    last: Cell<Option<(usize, AllocKind)>>,
}

impl CountingAllocator {
    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn last(&self) -> Option<(usize, AllocKind)> {
        self.last.get()
    }
}

impl Allocator for CountingAllocator {
    fn alloc_zeroed(&self, size: usize, kind: AllocKind) -> Result<ManagedPtr, AllocError> {
        self.count.set(self.count.get() + 1);
        self.last.set(Some((size, kind)));

        HostAllocator.alloc_zeroed(size, kind)
    }
}
