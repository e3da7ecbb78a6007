use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

type Subscriber<T> = Rc<dyn Fn(&T)>;

#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    next_id: SubId,
    subs: Vec<(SubId, Subscriber<T>)>,
}

impl<T: Clone> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            next_id: 0,
            subs: Vec::new(),
        })))
    }
    pub fn get(&self) -> T {
        self.0.borrow().value.clone()
    }
    pub fn set(&self, v: T) {
        self.update(|value| *value = v);
    }
    /// Subscribers run after the write with no borrow held, so they may
    /// read or write this signal.
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        let (value, subs) = {
            let mut inner = self.0.borrow_mut();
            f(&mut inner.value);
            let subs: Vec<Subscriber<T>> = inner.subs.iter().map(|(_, s)| s.clone()).collect();
            (inner.value.clone(), subs)
        };
        for s in subs {
            s(&value);
        }
    }
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subs.push((id, Rc::new(f)));
        id
    }
    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubId) -> bool {
        let mut inner = self.0.borrow_mut();
        let before = inner.subs.len();
        inner.subs.retain(|(sid, _)| *sid != id);
        inner.subs.len() != before
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Signal").field(&self.0.borrow().value).finish()
    }
}

pub fn signal<T: Clone>(t: T) -> Signal<T> {
    Signal::new(t)
}
