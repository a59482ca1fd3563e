use rocket::Route;

mod deadlines;
mod elections;
mod info;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(elections::routes());
    routes.extend(deadlines::routes());
    routes.extend(info::routes());
    routes
}
