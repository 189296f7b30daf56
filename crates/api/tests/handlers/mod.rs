mod bookings_test;
