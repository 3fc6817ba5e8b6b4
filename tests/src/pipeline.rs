mod live;
mod scripted;
