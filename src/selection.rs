//! Selection model for the three download dropdowns.
//!
//! Each category (OS, architecture, version) holds an ordered set of
//! mutually exclusive labels with exactly one active at any time. The
//! resolver never reads these directly; it takes an immutable [`Selections`]
//! snapshot captured at trigger time.

use log::debug;

/// The three selection categories presented by the download UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Os,
    Arch,
    Version,
}

/// An ordered set of mutually exclusive labels, exactly one active.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    category: Category,
    labels: Vec<String>,
    active: usize,
}

impl Selection {
    /// Operating system menu: macOS, windows, linux. Default: linux.
    pub fn os() -> Self {
        Self {
            category: Category::Os,
            labels: vec!["macOS".into(), "windows".into(), "linux".into()],
            active: 2,
        }
    }

    /// Architecture menu: 32 bit, 64 bit. Default: 64 bit.
    pub fn arch() -> Self {
        Self {
            category: Category::Arch,
            labels: vec!["32 bit".into(), "64 bit".into()],
            active: 1,
        }
    }

    /// Version menu. Free-form labels; default is the empty version.
    pub fn version() -> Self {
        Self {
            category: Category::Version,
            labels: vec![String::new()],
            active: 0,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The currently active label.
    pub fn active(&self) -> &str {
        &self.labels[self.active]
    }

    /// All labels in menu order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Activate `label`, deactivating whichever label was active before.
    ///
    /// A label not present in the set is appended and activated rather than
    /// rejected; unknown labels are treated as already-canonical downstream.
    pub fn choose(&mut self, label: &str) {
        match self.labels.iter().position(|l| l == label) {
            Some(index) => self.active = index,
            None => {
                debug!("{:?}: unrecognized label {:?}, passing through", self.category, label);
                self.labels.push(label.to_string());
                self.active = self.labels.len() - 1;
            }
        }
    }
}

/// An immutable snapshot of the three active labels, taken at the moment the
/// download is triggered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selections {
    pub os: String,
    pub arch: String,
    pub version: String,
}

impl Selections {
    /// Snapshot the active label of each menu.
    pub fn capture(os: &Selection, arch: &Selection, version: &Selection) -> Self {
        Self {
            os: os.active().to_string(),
            arch: arch.active().to_string(),
            version: version.active().to_string(),
        }
    }
}
