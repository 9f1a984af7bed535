mod helpers;
mod test_contributions;
mod test_geo;
mod test_places;
