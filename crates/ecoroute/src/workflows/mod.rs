pub mod shipment;
