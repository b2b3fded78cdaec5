mod scramble;
mod selection;
