use mockall::mock;
use uuid::Uuid;

use crate::models::{DbBooking, DbBookingDetail};

// Mock repository for testing handler logic without a live database
mock! {
    pub BookingRepo {
        pub async fn list_bookings(&self) -> eyre::Result<Vec<DbBookingDetail>>;

        pub async fn get_booking(&self, id: Uuid) -> eyre::Result<Option<DbBookingDetail>>;

        pub async fn set_booking_status(
            &self,
            id: Uuid,
            status: &'static str,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn set_booking_statuses(
            &self,
            ids: Vec<Uuid>,
            status: &'static str,
        ) -> eyre::Result<u64>;
    }
}
