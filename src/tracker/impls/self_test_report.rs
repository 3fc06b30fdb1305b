use std::ops::AddAssign;
use crate::tracker::structs::self_test_report::SelfTestReport;

impl AddAssign for SelfTestReport {
    fn add_assign(&mut self, other: SelfTestReport) {
        self.operations += other.operations;
        self.inserted += other.inserted;
        self.found += other.found;
        self.removed += other.removed;
        self.failed += other.failed;
    }
}
